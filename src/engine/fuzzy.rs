use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::fuzzy_matcher::FuzzyMatcher;
use crate::fuzzy_matcher::fuzzyfind::FuzzyFindMatcher;
use crate::{Alignment, MatchEngine, ScoringPolicy};

//------------------------------------------------------------------------------
// Fuzzy engine
#[derive(Default)]
pub struct FuzzyEngineBuilder {
    query: String,
    policy: ScoringPolicy,
    matcher: Option<Arc<dyn FuzzyMatcher>>,
}

impl FuzzyEngineBuilder {
    pub fn query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use an existing matcher instead of building one from the policy. Lets
    /// several engines share the matcher's scratch buffers.
    pub fn matcher(mut self, matcher: Arc<dyn FuzzyMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn build(self) -> FuzzyEngine {
        let matcher = match self.matcher {
            Some(matcher) => matcher,
            None => {
                debug!("Initialized fuzzyfind matcher: {:?}", self.policy);
                Arc::new(FuzzyFindMatcher::new(self.policy))
            }
        };
        FuzzyEngine {
            query: self.query,
            matcher,
        }
    }
}

/// Aligns a single query term.
pub struct FuzzyEngine {
    query: String,
    matcher: Arc<dyn FuzzyMatcher>,
}

impl FuzzyEngine {
    /// Returns a default builder for chaining
    pub fn builder() -> FuzzyEngineBuilder {
        FuzzyEngineBuilder::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl MatchEngine for FuzzyEngine {
    fn match_item(&self, candidate: &str) -> Option<Alignment> {
        self.matcher.fuzzy_align(candidate, &self.query)
    }
}

impl Display for FuzzyEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Fuzzy: {})", self.query)
    }
}
