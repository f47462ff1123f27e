//! Fuzzy matching algorithms and implementations.
//!
//! A matcher aligns one pattern against one choice string. The only algorithm
//! shipped is [`fuzzyfind`].

/// FuzzyFind alignment algorithm (local alignment with context bonuses)
pub mod fuzzyfind;
#[cfg(test)]
mod util;

use crate::{Alignment, Score};

pub(crate) type IndexType = usize;

/// Char offsets of the matched characters of a choice, ascending.
pub type MatchIndices = Vec<IndexType>;

/// Trait for fuzzy matching text patterns against choices
pub trait FuzzyMatcher: Send + Sync {
    /// Align pattern with choice, returning the score and the gap/match
    /// classification of every character of `choice`.
    fn fuzzy_align(&self, choice: &str, pattern: &str) -> Option<Alignment>;

    /// fuzzy match choice with pattern, and return the score & matched indices of characters
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(Score, MatchIndices)> {
        self.fuzzy_align(choice, pattern)
            .map(|res| (res.score, res.classification.matched_indices()))
    }

    /// fuzzy match choice with pattern, and return the score of matching
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<Score> {
        self.fuzzy_indices(choice, pattern).map(|(score, _)| score)
    }

    /// Fuzzy match and return (score, begin_char_index, end_char_index).
    ///
    /// `begin` is the character index of the first matched pattern character,
    /// `end` is the character index of the last matched pattern character.
    fn fuzzy_match_range(&self, choice: &str, pattern: &str) -> Option<(Score, usize, usize)> {
        self.fuzzy_indices(choice, pattern).map(|(score, indices)| {
            let begin = indices.first().copied().unwrap_or(0);
            let end = indices.last().copied().unwrap_or(0);
            (score, begin, end)
        })
    }
}
