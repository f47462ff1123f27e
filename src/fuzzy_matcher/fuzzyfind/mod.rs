//! FuzzyFind alignment algorithm.
//!
//! A Smith-Waterman style local alignment of a query against a candidate, with
//! context bonuses for word boundaries, camel humps, the first query character and
//! runs of consecutive matches.
//!
//! ## Key design choices
//!
//! - **Full gap scan**: the gap term considers every gap length ending at the
//!   current cell and charges `gap_penalty(l)` for it, so any monotonic penalty
//!   shape is supported. Cost is `O(m * n^2)` time and `O(m * n)` memory.
//! - **Bonus applied at the end point too**: the best alignment ends on the last
//!   query row at the column maximising `H(m, j) + Bonus(m, j)`.
//! - **Greedy traceback**: from that end point, every case-insensitive match is
//!   taken. Everything left of the alignment and right of its end is gap.
//!
//! ## Pruning
//!
//! - **Subsequence prefilter**: candidates that do not contain the query in
//!   order are rejected before any table is filled.

mod algo;
mod atom;
mod bonus;
mod matrix;
mod prefilter;
#[cfg(test)]
mod tests;

use std::cell::RefCell;

use thread_local::ThreadLocal;

use self::algo::align_slices;
use self::atom::Atom;
use self::matrix::Scratch;
use self::prefilter::is_subsequence;

use crate::fuzzy_matcher::{FuzzyMatcher, MatchIndices};
use crate::{Alignment, Classification, Score, ScoringPolicy};

/// FuzzyFind matcher: local alignment with context-sensitive bonuses.
///
/// Scratch tables live in thread-local buffers so one matcher can be shared across
/// a rayon pool without reallocating per candidate.
#[derive(Debug, Default)]
pub struct FuzzyFindMatcher {
    pub(crate) policy: ScoringPolicy,
    scratch: ThreadLocal<RefCell<Scratch>>,
    #[allow(clippy::type_complexity)]
    char_buf: ThreadLocal<RefCell<(Vec<char>, Vec<char>)>>,
}

impl FuzzyFindMatcher {
    /// Create a new `FuzzyFindMatcher` scoring with `policy`.
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    fn match_slices<C: Atom>(&self, cho: &[C], pat: &[C]) -> Option<(Score, MatchIndices)> {
        if !is_subsequence(pat, cho) {
            return None;
        }
        let mut scratch = self.scratch.get_or(|| RefCell::new(Scratch::default())).borrow_mut();
        align_slices(cho, pat, &self.policy, &mut scratch)
    }

    fn run(&self, choice: &str, pattern: &str) -> Option<(Score, MatchIndices)> {
        if pattern.is_empty() {
            return Some((0, MatchIndices::new()));
        }
        if choice.is_empty() {
            return None;
        }

        // Fast path for ASCII matching
        if choice.is_ascii() && pattern.is_ascii() {
            return self.match_slices(choice.as_bytes(), pattern.as_bytes());
        }

        let mut bufs = self
            .char_buf
            .get_or(|| RefCell::new((Vec::new(), Vec::new())))
            .borrow_mut();
        let (ref mut pat_buf, ref mut cho_buf) = *bufs;
        pat_buf.clear();
        pat_buf.extend(pattern.chars());
        cho_buf.clear();
        cho_buf.extend(choice.chars());

        self.match_slices(cho_buf, pat_buf)
    }
}

// ---------------------------------------------------------------------------
// FuzzyMatcher trait implementation
// ---------------------------------------------------------------------------

impl FuzzyMatcher for FuzzyFindMatcher {
    fn fuzzy_align(&self, choice: &str, pattern: &str) -> Option<Alignment> {
        let Some((score, indices)) = self.run(choice, pattern) else {
            trace!("no alignment of {pattern:?} in {choice:?}");
            return None;
        };
        Some(Alignment::new(score, Classification::from_indices(choice, &indices)))
    }

    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(Score, MatchIndices)> {
        self.run(choice, pattern)
    }
}
