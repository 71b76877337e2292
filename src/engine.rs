//! Analysis facade
//!
//! `analyze` is the single entry point for graph construction and
//! analytics: it builds a fresh graph from the candidate pool, runs
//! centrality and community detection, and returns everything as one
//! immutable result. Nothing is shared or mutated across calls.

use crate::algo::{
    detect_communities, power_centrality, CentralityConfig, COMMUNITY_SEED,
};
use crate::candidate::Candidate;
use crate::export::{export_graph, GraphExport};
use crate::graph::{build_graph, expert_node_id, Graph};
use std::collections::HashMap;
use tracing::warn;

/// Immutable bundle of a built graph and its derived signals.
#[derive(Debug, Clone)]
pub struct GraphAnalysis {
    graph: Graph,
    /// Raw centrality per dense node index; all-zero when iteration failed.
    centrality: Vec<f64>,
    /// Node id -> cluster id; empty when detection failed or the graph has
    /// no edges.
    communities: HashMap<String, usize>,
}

/// Build the knowledge graph from at most `limit` candidates and compute
/// its signals. Analytics failures degrade to safe defaults (zero scores,
/// empty partition); this function never fails.
pub fn analyze(candidates: &[Candidate], limit: usize) -> GraphAnalysis {
    let graph = build_graph(candidates, limit);

    let centrality = match power_centrality(&graph, &CentralityConfig::default()) {
        Ok(scores) => scores,
        Err(err) => {
            warn!(error = %err, "centrality failed; defaulting all influence to zero");
            vec![0.0; graph.node_count()]
        }
    };

    let communities = detect_communities(&graph, COMMUNITY_SEED);

    GraphAnalysis {
        graph,
        centrality,
        communities,
    }
}

impl GraphAnalysis {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Network-influence score for a candidate, in [0, 1].
    ///
    /// Raw centrality divided by the maximum across all nodes (not just
    /// experts), rounded to 4 decimals. Unknown candidates, empty graphs,
    /// and degraded all-zero score maps return 0.0.
    pub fn influence(&self, candidate_id: &str) -> f64 {
        let idx = match self.graph.index_of(&expert_node_id(candidate_id)) {
            Some(idx) => idx,
            None => return 0.0,
        };
        let raw = self.centrality.get(idx).copied().unwrap_or(0.0);
        let max_score = self.centrality.iter().fold(0.0_f64, |acc, &s| acc.max(s));
        if max_score <= 0.0 {
            return 0.0;
        }
        ((raw / max_score) * 10_000.0).round() / 10_000.0
    }

    /// Serialize graph + signals into the visualization wire format.
    pub fn export(&self) -> GraphExport {
        export_graph(&self.graph, &self.centrality, &self.communities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DEFAULT_CANDIDATE_LIMIT;

    fn pool() -> Vec<Candidate> {
        let mut a = Candidate::new("e1", "Jane");
        a.past_employers = vec!["Goldman Sachs".into(), "McKinsey".into()];
        a.skills = vec!["M&A".into()];
        let mut b = Candidate::new("e2", "John");
        b.past_employers = vec!["Goldman Sachs".into()];
        vec![a, b]
    }

    #[test]
    fn test_influence_bounds() {
        let analysis = analyze(&pool(), DEFAULT_CANDIDATE_LIMIT);
        for id in ["e1", "e2"] {
            let inf = analysis.influence(id);
            assert!((0.0..=1.0).contains(&inf), "influence out of range: {}", inf);
        }
    }

    #[test]
    fn test_unknown_candidate_zero() {
        let analysis = analyze(&pool(), DEFAULT_CANDIDATE_LIMIT);
        assert_eq!(analysis.influence("missing"), 0.0);
    }

    #[test]
    fn test_empty_pool_zero_influence() {
        let analysis = analyze(&[], DEFAULT_CANDIDATE_LIMIT);
        assert_eq!(analysis.influence("e1"), 0.0);
        assert!(analysis.graph().is_empty());
    }

    #[test]
    fn test_influence_rounded_to_four_decimals() {
        let analysis = analyze(&pool(), DEFAULT_CANDIDATE_LIMIT);
        let inf = analysis.influence("e1");
        let rounded = (inf * 10_000.0).round() / 10_000.0;
        assert_eq!(inf, rounded);
    }

    #[test]
    fn test_analysis_is_rebuilt_per_call() {
        let first = analyze(&pool(), DEFAULT_CANDIDATE_LIMIT);
        let second = analyze(&pool(), DEFAULT_CANDIDATE_LIMIT);
        assert_eq!(first.graph().node_count(), second.graph().node_count());
        assert_eq!(first.influence("e1"), second.influence("e1"));
    }
}
