//! Dense score tables: the memo of the recurrence and the bonus table.

use crate::score::Score;

/// Row-major `rows x cols` table of scores.
#[derive(Default, Debug)]
pub(super) struct ScoreMatrix {
    data: Vec<Score>,
    cols: usize,
}

impl ScoreMatrix {
    /// Resize to `rows x cols` and zero every cell. Keeps the allocation.
    pub(super) fn reset(&mut self, rows: usize, cols: usize) {
        self.data.clear();
        self.data.resize(rows * cols, 0);
        self.cols = cols;
    }

    #[inline(always)]
    pub(super) fn get(&self, i: usize, j: usize) -> Score {
        self.data[i * self.cols + j]
    }

    #[inline(always)]
    pub(super) fn set(&mut self, i: usize, j: usize, score: Score) {
        self.data[i * self.cols + j] = score;
    }

    #[inline(always)]
    pub(super) fn row(&self, i: usize) -> &[Score] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

/// Per-thread buffers reused across calls. Every call resets them before use.
#[derive(Default, Debug)]
pub(super) struct Scratch {
    /// `H(i, j)` for `0 <= i <= m`, `0 <= j <= n`.
    pub(super) memo: ScoreMatrix,
    /// `Bonus(i, j)`, same shape as `memo`.
    pub(super) bonuses: ScoreMatrix,
    /// `gap_penalty(l)` for `0 <= l <= n`; index 0 is unused.
    pub(super) gaps: Vec<Score>,
}
