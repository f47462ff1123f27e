//! Fuzzy substring alignment.
//!
//! Given a short query and a longer candidate, find every query character in the
//! candidate, in order and ignoring case, and report the best-scoring way to do it
//! along with a gap/match [`Classification`] of every candidate character.
//!
//! Scoring favours contiguous runs, matches at word boundaries and camel humps, and
//! a first query character that lands on one of those.
//!
//! ```
//! use fuzzyfind::{ScoringPolicy, Segment, align};
//!
//! let res = align("ff", "FuzzyFind", &ScoringPolicy::default()).unwrap();
//! assert_eq!(
//!     res.classification.segments(),
//!     &[
//!         Segment::Match("F".into()),
//!         Segment::Gap("uzzy".into()),
//!         Segment::Match("F".into()),
//!         Segment::Gap("ind".into()),
//!     ]
//! );
//! ```

#[macro_use]
extern crate log;

mod alignment;
pub mod engine;
mod error;
pub mod fuzzy_matcher;
mod score;
mod segment;

pub use crate::alignment::Alignment;
pub use crate::engine::batch::{search, search_with};
pub use crate::engine::{AndEngine, FuzzyEngine, FuzzyEngineBuilder, MatchEngine};
pub use crate::error::{Error, Result};
pub use crate::fuzzy_matcher::FuzzyMatcher;
pub use crate::fuzzy_matcher::fuzzyfind::FuzzyFindMatcher;
pub use crate::score::{Score, ScoringPolicy, default_gap_penalty};
pub use crate::segment::{Classification, Segment};

/// Best alignment of `query` inside `candidate`, or `None` if the query cannot be
/// found in order.
pub fn align(query: &str, candidate: &str, policy: &ScoringPolicy) -> Option<Alignment> {
    FuzzyFindMatcher::new(*policy).fuzzy_align(candidate, query)
}

/// Align every query term against `candidate` and merge the results. `None` as
/// soon as one term fails.
pub fn combine<Q: AsRef<str>>(queries: &[Q], candidate: &str, policy: &ScoringPolicy) -> Option<Alignment> {
    AndEngine::from_terms(queries, policy).match_item(candidate)
}
