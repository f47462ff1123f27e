//! Scores and the scoring policy.

/// Signed integer score. Higher is better.
pub type Score = i64;

/// The weights driving the alignment engine.
///
/// All fields are public and the type is `Copy`, so a policy can be tweaked with
/// struct-update syntax or with the chained setters:
///
/// ```
/// use fuzzyfind::ScoringPolicy;
///
/// let policy = ScoringPolicy::default().boundary_bonus(10).camel_case_bonus(9);
/// assert_eq!(policy.boundary_bonus, 10);
/// ```
///
/// `gap_penalty` must be monotonically non-decreasing in its argument. This is not
/// checked.
#[derive(Debug, Clone, Copy)]
pub struct ScoringPolicy {
    /// Reward for a case-insensitive character equality.
    pub match_score: Score,
    /// Reward for comparing two different characters. Kept for symmetry with
    /// `match_score`; anything `<= 0` means "no match".
    pub mismatch: Score,
    /// Cost of skipping `n` consecutive candidate characters.
    pub gap_penalty: fn(usize) -> Score,
    /// Bonus for a match at the start of the string or right after a
    /// non-alphanumeric character.
    pub boundary_bonus: Score,
    /// Bonus for an uppercase match directly following a lowercase character.
    pub camel_case_bonus: Score,
    /// Multiplier applied to the bonuses of the first query character.
    pub first_char_bonus_multiplier: Score,
    /// Bonus for a match whose neighbouring pair also matches.
    pub consecutive_bonus: Score,
}

/// `3` for a single skipped character, `n + 3` otherwise.
pub const fn default_gap_penalty(n: usize) -> Score {
    if n == 1 { 3 } else { n as Score + 3 }
}

impl ScoringPolicy {
    pub const DEFAULT_MATCH: Score = 16;
    pub const DEFAULT_MISMATCH: Score = 0;
    pub const DEFAULT_BOUNDARY_BONUS: Score = Self::DEFAULT_MATCH / 2;
    pub const DEFAULT_CAMEL_CASE_BONUS: Score = Self::DEFAULT_BOUNDARY_BONUS - 1;
    pub const DEFAULT_FIRST_CHAR_MULTIPLIER: Score = 2;
    pub const DEFAULT_CONSECUTIVE_BONUS: Score = default_gap_penalty(8);

    pub fn match_score(mut self, score: Score) -> Self {
        self.match_score = score;
        self
    }

    pub fn mismatch(mut self, score: Score) -> Self {
        self.mismatch = score;
        self
    }

    pub fn gap_penalty(mut self, gap_penalty: fn(usize) -> Score) -> Self {
        self.gap_penalty = gap_penalty;
        self
    }

    pub fn boundary_bonus(mut self, bonus: Score) -> Self {
        self.boundary_bonus = bonus;
        self
    }

    pub fn camel_case_bonus(mut self, bonus: Score) -> Self {
        self.camel_case_bonus = bonus;
        self
    }

    pub fn first_char_bonus_multiplier(mut self, multiplier: Score) -> Self {
        self.first_char_bonus_multiplier = multiplier;
        self
    }

    pub fn consecutive_bonus(mut self, bonus: Score) -> Self {
        self.consecutive_bonus = bonus;
        self
    }

    /// Payoff for comparing two characters.
    #[inline(always)]
    pub(crate) fn similarity(&self, equal: bool) -> Score {
        if equal { self.match_score } else { self.mismatch }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            match_score: Self::DEFAULT_MATCH,
            mismatch: Self::DEFAULT_MISMATCH,
            gap_penalty: default_gap_penalty,
            boundary_bonus: Self::DEFAULT_BOUNDARY_BONUS,
            camel_case_bonus: Self::DEFAULT_CAMEL_CASE_BONUS,
            first_char_bonus_multiplier: Self::DEFAULT_FIRST_CHAR_MULTIPLIER,
            consecutive_bonus: Self::DEFAULT_CONSECUTIVE_BONUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = ScoringPolicy::default();
        assert_eq!(p.match_score, 16);
        assert_eq!(p.mismatch, 0);
        assert_eq!(p.boundary_bonus, 8);
        assert_eq!(p.camel_case_bonus, 7);
        assert_eq!(p.first_char_bonus_multiplier, 2);
        assert_eq!(p.consecutive_bonus, 11);
    }

    #[test]
    fn gap_penalty_shape() {
        assert_eq!(default_gap_penalty(1), 3);
        assert_eq!(default_gap_penalty(2), 5);
        assert_eq!(default_gap_penalty(8), 11);
    }
}
