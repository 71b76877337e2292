//! Knowledge graph data model and construction

pub mod builder;
pub mod store;
pub mod types;

pub use builder::{build_graph, DEFAULT_CANDIDATE_LIMIT};
pub use store::Graph;
pub use types::{expert_node_id, node_id_for, Edge, EdgeKind, Node, NodeGroup};
