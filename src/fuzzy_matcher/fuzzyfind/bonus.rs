//! Context bonuses for every (query, candidate) position pair.

use super::atom::Atom;
use super::matrix::ScoreMatrix;
use crate::score::{Score, ScoringPolicy};

/// Fill `buf` with `Bonus(i, j)` for `0 <= i <= m`, `0 <= j <= n` (1-indexed
/// positions; row and column 0 stay zero).
///
/// A pair that does not match gets nothing. A matching pair earns:
///   - `boundary_bonus` at the start of the candidate or right after a
///     non-alphanumeric character,
///   - `camel_case_bonus` on a lowercase-to-uppercase transition,
///   - `consecutive_bonus` when the diagonal neighbour before or after it also
///     matches.
///
/// The sum is multiplied by `first_char_bonus_multiplier` on the first query row.
pub(super) fn precompute_bonuses<C: Atom>(pat: &[C], cho: &[C], policy: &ScoringPolicy, buf: &mut ScoreMatrix) {
    let m = pat.len();
    let n = cho.len();
    buf.reset(m + 1, n + 1);

    // 1-indexed
    let similar = |i: usize, j: usize| policy.similarity(pat[i - 1].eq_ignore_case(cho[j - 1])) > 0;

    for i in 1..=m {
        let multiplier: Score = if i == 1 { policy.first_char_bonus_multiplier } else { 1 };
        for j in 1..=n {
            if !similar(i, j) {
                continue;
            }
            let cur = cho[j - 1];
            let boundary = if j == 1 || (cur.is_alphanumeric() && !cho[j - 2].is_alphanumeric()) {
                policy.boundary_bonus
            } else {
                0
            };
            let camel = if j > 1 && cho[j - 2].is_lowercase() && cur.is_uppercase() {
                policy.camel_case_bonus
            } else {
                0
            };
            let after_match = i > 1 && j > 1 && similar(i - 1, j - 1);
            let before_match = i < m && j < n && similar(i + 1, j + 1);
            let consecutive = if after_match || before_match {
                policy.consecutive_bonus
            } else {
                0
            };
            buf.set(i, j, multiplier * (boundary + camel + consecutive));
        }
    }
}
