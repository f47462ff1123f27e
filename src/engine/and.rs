use std::fmt::{Display, Error, Formatter};
use std::sync::Arc;

use crate::fuzzy_matcher::FuzzyMatcher;
use crate::fuzzy_matcher::fuzzyfind::FuzzyFindMatcher;
use crate::{Alignment, Classification, FuzzyEngine, MatchEngine, ScoringPolicy};

//------------------------------------------------------------------------------
// AndEngine, a combinator
/// Every engine must match. Scores add up and classifications merge, in engine
/// order.
pub struct AndEngine {
    engines: Vec<Box<dyn MatchEngine>>,
}

impl AndEngine {
    pub fn builder() -> Self {
        Self { engines: vec![] }
    }

    pub fn engines(mut self, mut engines: Vec<Box<dyn MatchEngine>>) -> Self {
        self.engines.append(&mut engines);
        self
    }

    pub fn build(self) -> Self {
        self
    }

    /// One [`FuzzyEngine`] per term, all sharing a single matcher.
    pub fn from_terms<S: AsRef<str>>(terms: &[S], policy: &ScoringPolicy) -> Self {
        let matcher: Arc<dyn FuzzyMatcher> = Arc::new(FuzzyFindMatcher::new(*policy));
        let engines = terms
            .iter()
            .map(|term| {
                Box::new(
                    FuzzyEngine::builder()
                        .query(term.as_ref())
                        .matcher(matcher.clone())
                        .build(),
                ) as Box<dyn MatchEngine>
            })
            .collect();
        let res = Self::builder().engines(engines).build();
        debug!("Initialized {res}");
        res
    }
}

impl MatchEngine for AndEngine {
    fn match_item(&self, candidate: &str) -> Option<Alignment> {
        if self.engines.is_empty() {
            return Some(Alignment::new(0, Classification::gaps(candidate)));
        }

        let mut res = Alignment::empty();
        for engine in &self.engines {
            let next = engine.match_item(candidate)?;
            res = res.combine(&next);
        }
        Some(res)
    }
}

impl Display for AndEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "(And: {})",
            self.engines
                .iter()
                .map(|e| format!("{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
