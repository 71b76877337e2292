//! In-memory graph storage
//!
//! Uses a dense node arena plus a hash index for O(1) id lookup:
//! - nodes: Vec<Node>, index position doubles as the node's dense index
//! - edges: Vec<Edge>, directed, parallel edges of differing kinds allowed
//! - index: node id -> dense index
//!
//! The graph is rebuilt wholesale on every build call; there is no
//! incremental mutation API beyond interning during construction.

use super::types::{Edge, EdgeKind, Node, NodeGroup};
use rustc_hash::FxHashMap;

/// Directed knowledge graph of experts, companies, skills, and industries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: FxHashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Intern a node, returning its dense index. If a node with the same id
    /// already exists it is returned untouched; nodes are never mutated
    /// after creation.
    pub fn intern_node(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        group: NodeGroup,
    ) -> usize {
        let id = id.into();
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(Node::new(id, label, group));
        idx
    }

    /// Add a directed edge between two interned nodes. Indices outside the
    /// arena are a construction bug, not recoverable state.
    pub fn add_edge(&mut self, source: usize, target: usize, kind: EdgeKind) {
        debug_assert!(source < self.nodes.len() && target < self.nodes.len());
        self.edges.push(Edge {
            source,
            target,
            kind,
        });
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Dense index for a node id, if present.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Out-degree per node, indexed densely.
    pub fn out_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.nodes.len()];
        for edge in &self.edges {
            degrees[edge.source] += 1;
        }
        degrees
    }

    /// Incoming adjacency list: for each node, the source indices of its
    /// incoming edges (parallel edges preserved).
    pub fn incoming(&self) -> Vec<Vec<usize>> {
        let mut incoming = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            incoming[edge.target].push(edge.source);
        }
        incoming
    }
}
