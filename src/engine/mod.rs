//! Engines turn query terms into per-candidate alignments.
//!
//! [`FuzzyEngine`] aligns a single term, [`AndEngine`] requires every one of its
//! engines to match and merges their results, and [`batch`] runs an engine over a
//! whole candidate list.

pub mod and;
pub mod batch;
pub mod fuzzy;

use std::fmt::Display;

use crate::Alignment;

pub use self::and::AndEngine;
pub use self::fuzzy::{FuzzyEngine, FuzzyEngineBuilder};

/// Something that can align a candidate string.
pub trait MatchEngine: Send + Sync + Display {
    /// Align the candidate, or `None` if it does not match.
    fn match_item(&self, candidate: &str) -> Option<Alignment>;
}
