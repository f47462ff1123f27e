use crate::score::Score;
use crate::segment::Classification;

/// The result of aligning one or more query terms against a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    pub score: Score,
    pub classification: Classification,
}

impl Alignment {
    pub fn new(score: Score, classification: Classification) -> Self {
        Self { score, classification }
    }

    /// Neutral element of [`combine`](Self::combine): score 0, no segments.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sum the scores and merge the classifications of two alignments of the same
    /// candidate.
    pub fn combine(&self, other: &Alignment) -> Alignment {
        Alignment {
            score: self.score + other.score,
            classification: self.classification.merge(&other.classification),
        }
    }

    /// The aligned candidate string.
    pub fn as_string(&self) -> String {
        self.classification.as_string()
    }

    /// See [`Classification::highlight`].
    pub fn highlight(&self) -> String {
        self.classification.highlight()
    }
}
