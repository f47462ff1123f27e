//! Run an engine over a list of candidates and rank the survivors.

use rayon::prelude::*;

use crate::{Alignment, AndEngine, MatchEngine, ScoringPolicy};

/// Align every candidate against all `queries`, drop the ones that fail any term
/// and return the rest best-first.
///
/// Candidates are processed in parallel. The order of equal scores is unspecified.
pub fn search<Q, S>(queries: &[Q], candidates: &[S], policy: &ScoringPolicy) -> Vec<Alignment>
where
    Q: AsRef<str>,
    S: AsRef<str> + Sync,
{
    let engine = AndEngine::from_terms(queries, policy);
    search_with(&engine, candidates)
}

/// [`search`] with a prepared engine.
pub fn search_with<E, S>(engine: &E, candidates: &[S]) -> Vec<Alignment>
where
    E: MatchEngine + ?Sized,
    S: AsRef<str> + Sync,
{
    let mut results: Vec<Alignment> = candidates
        .par_iter()
        .filter_map(|candidate| engine.match_item(candidate.as_ref()))
        .collect();
    results.par_sort_unstable_by(|a, b| b.score.cmp(&a.score));
    debug!("{engine}: {}/{} candidates matched", results.len(), candidates.len());
    results
}
