//! Expertgraph
//!
//! Knowledge-graph driven candidate ranking. Candidate records are folded
//! into a typed directed graph (experts, companies, skills, industries);
//! damped power-iteration centrality and seeded community detection derive
//! network signals from it; a composite heuristic scorer blends those
//! signals with seniority, industry match, rate, and semantic similarity;
//! and a per-batch regression smooths the final ordering.
//!
//! Everything is synchronous and stateless per call: each invocation builds
//! a fresh graph and a fresh model, so concurrent calls share nothing.
//!
//! # Example
//!
//! ```rust
//! use expertgraph::{rank_candidates, Brief, Candidate, DEFAULT_CANDIDATE_LIMIT};
//! use std::collections::HashMap;
//!
//! let mut candidate = Candidate::new("e1", "Jane Smith");
//! candidate.industry = "Finance".to_string();
//! candidate.past_employers = vec!["Goldman Sachs".to_string()];
//!
//! let brief = Brief {
//!     industry: Some("Finance".to_string()),
//!     ..Brief::default()
//! };
//!
//! let ranked = rank_candidates(&brief, &[candidate], &HashMap::new(), DEFAULT_CANDIDATE_LIMIT);
//! assert_eq!(ranked[0].expert_id, "e1");
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod candidate;
pub mod engine;
pub mod export;
pub mod graph;
pub mod ranking;

// Re-export main types for convenience
pub use candidate::{Brief, Candidate, RankedExpert, ScoredCandidate};
pub use engine::{analyze, GraphAnalysis};
pub use export::{ExportLink, ExportNode, GraphExport};
pub use graph::{build_graph, Edge, EdgeKind, Graph, Node, NodeGroup, DEFAULT_CANDIDATE_LIMIT};
pub use ranking::{rank_candidates, rerank, CompositeScorer};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
