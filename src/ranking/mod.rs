//! Candidate scoring and re-ranking pipeline

pub mod rerank;
pub mod scorer;

pub use rerank::rerank;
pub use scorer::{CompositeScorer, DEFAULT_SIMILARITY};

use crate::candidate::{Brief, Candidate, RankedExpert};
use crate::engine::analyze;
use std::collections::HashMap;

/// End-to-end ranking: build the knowledge graph and its signals from the
/// pool, composite-score every candidate against the brief (semantic
/// similarities default to 0.5 where the provider has no entry), refine
/// with the per-batch regression, and project to the ranking result
/// schema.
pub fn rank_candidates(
    brief: &Brief,
    candidates: &[Candidate],
    semantic: &HashMap<String, f64>,
    limit: usize,
) -> Vec<RankedExpert> {
    let analysis = analyze(candidates, limit);
    let scorer = CompositeScorer::new(brief, Some(&analysis));
    let scored = scorer.rank(candidates, semantic);
    let refined = rerank(scored);
    refined.into_iter().map(RankedExpert::from).collect()
}
