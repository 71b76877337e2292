//! Shared projections for graph algorithms
//!
//! Provides a collapsed undirected view of the knowledge graph for
//! algorithms that ignore edge direction and kind.

use crate::graph::Graph;
use rustc_hash::FxHashSet;

/// Undirected simple-graph view: direction and edge kind discarded,
/// parallel edges collapsed, self loops dropped.
pub struct UndirectedView {
    pub node_count: usize,
    /// Neighbor indices per node, each undirected edge appearing once on
    /// both endpoints.
    pub adjacency: Vec<Vec<usize>>,
    /// Number of distinct undirected edges.
    pub edge_count: usize,
}

impl UndirectedView {
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.node_count();
        let mut adjacency = vec![Vec::new(); n];
        let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();

        for edge in graph.edges() {
            let (a, b) = if edge.source <= edge.target {
                (edge.source, edge.target)
            } else {
                (edge.target, edge.source)
            };
            if a == b || !seen.insert((a, b)) {
                continue;
            }
            adjacency[a].push(b);
            adjacency[b].push(a);
        }

        UndirectedView {
            node_count: n,
            adjacency,
            edge_count: seen.len(),
        }
    }

    pub fn degree(&self, idx: usize) -> usize {
        self.adjacency[idx].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeKind, NodeGroup};

    #[test]
    fn test_parallel_and_reverse_edges_collapse() {
        let mut graph = Graph::new();
        let a = graph.intern_node("expert_a", "A", NodeGroup::Expert);
        let b = graph.intern_node("expert_b", "B", NodeGroup::Expert);
        graph.add_edge(a, b, EdgeKind::SharedEmployer);
        graph.add_edge(b, a, EdgeKind::SharedEmployer);
        graph.add_edge(a, b, EdgeKind::SameSubIndustry);

        let view = UndirectedView::from_graph(&graph);
        assert_eq!(view.edge_count, 1);
        assert_eq!(view.degree(a), 1);
        assert_eq!(view.degree(b), 1);
    }

    #[test]
    fn test_empty_graph_view() {
        let view = UndirectedView::from_graph(&Graph::new());
        assert_eq!(view.node_count, 0);
        assert_eq!(view.edge_count, 0);
    }
}
