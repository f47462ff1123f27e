//! The recurrence, the choice of the end point, and the traceback.

use super::atom::Atom;
use super::bonus::precompute_bonuses;
use super::matrix::{Scratch, ScoreMatrix};
use crate::fuzzy_matcher::MatchIndices;
use crate::score::{Score, ScoringPolicy};

/// Align `pat` against `cho`, returning the score and the 0-indexed positions in
/// `cho` of the matched characters.
///
/// Both slices must be non-empty.
pub(super) fn align_slices<C: Atom>(
    cho: &[C],
    pat: &[C],
    policy: &ScoringPolicy,
    scratch: &mut Scratch,
) -> Option<(Score, MatchIndices)> {
    let m = pat.len();
    let n = cho.len();
    let Scratch { memo, bonuses, gaps } = scratch;

    precompute_bonuses(pat, cho, policy, bonuses);
    gaps.clear();
    gaps.push(0);
    gaps.extend((1..=n).map(policy.gap_penalty));

    fill_memo(pat, cho, policy, bonuses, gaps, memo);
    let (score, end) = best_end(memo, bonuses, m);
    let indices = traceback(pat, cho, policy, end)?;
    Some((score, indices))
}

/// Local-alignment recurrence:
///
/// ```text
/// H(i, 0) = H(0, j) = 0
/// H(i, j) = max(H(i-1, j-1) + sim(i, j) + Bonus(i, j),
///               max over 1 <= l <= j of H(i, j-l) - gap(l),
///               0)
/// ```
///
/// Every cell scans its whole row prefix for the gap term, so this is
/// `O(m * n^2)`. Fine for interactive query/candidate lengths, not for long
/// strings.
fn fill_memo<C: Atom>(
    pat: &[C],
    cho: &[C],
    policy: &ScoringPolicy,
    bonuses: &ScoreMatrix,
    gaps: &[Score],
    memo: &mut ScoreMatrix,
) {
    let m = pat.len();
    let n = cho.len();
    memo.reset(m + 1, n + 1);

    for i in 1..=m {
        let pi = pat[i - 1];
        for j in 1..=n {
            let diag = memo.get(i - 1, j - 1) + policy.similarity(pi.eq_ignore_case(cho[j - 1])) + bonuses.get(i, j);
            let gap = (1..=j).map(|l| memo.get(i, j - l) - gaps[l]).max().unwrap_or(0);
            memo.set(i, j, diag.max(gap).max(0));
        }
    }
}

/// Pick the column of the last row maximising `H(m, j) + Bonus(m, j)`.
///
/// Scans left to right and only moves on a strictly greater total, so the earliest
/// of several equal maxima wins.
fn best_end(memo: &ScoreMatrix, bonuses: &ScoreMatrix, m: usize) -> (Score, usize) {
    let totals = memo.row(m).iter().zip(bonuses.row(m)).map(|(h, b)| h + b);
    let mut best_score = Score::MIN;
    let mut best_j = 1;
    for (j, total) in totals.enumerate().skip(1) {
        if total > best_score {
            best_score = total;
            best_j = j;
        }
    }
    (best_score, best_j)
}

/// Walk back from `(m, end)`: a matching pair consumes one query and one candidate
/// character, anything else skips a candidate character. Fails when the candidate
/// runs out before the query does.
fn traceback<C: Atom>(pat: &[C], cho: &[C], policy: &ScoringPolicy, end: usize) -> Option<MatchIndices> {
    let mut indices = MatchIndices::with_capacity(pat.len());
    let mut i = pat.len();
    let mut j = end;
    while i > 0 {
        if j == 0 {
            return None;
        }
        if policy.similarity(pat[i - 1].eq_ignore_case(cho[j - 1])) > 0 {
            indices.push(j - 1);
            i -= 1;
        }
        j -= 1;
    }
    indices.reverse();
    Some(indices)
}
