//! Seeded modularity-based community detection
//!
//! Best-effort clustering for display: single-level local moving over the
//! collapsed undirected view, greedily maximizing modularity. The visit
//! order is shuffled with a fixed seed so results are reproducible across
//! rebuilds. An empty or edgeless graph yields an empty partition, which
//! the exporter renders as community -1 for every node. The partition is
//! never consulted by scoring.

use super::common::UndirectedView;
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use tracing::debug;

/// Fixed shuffle seed for reproducible partitions.
pub const COMMUNITY_SEED: u64 = 42;

const MAX_PASSES: usize = 10;

/// Partition the graph into disjoint communities, returning a map from
/// node id to dense cluster id. Nodes absent from the map are unassigned.
pub fn detect_communities(graph: &Graph, seed: u64) -> HashMap<String, usize> {
    let view = UndirectedView::from_graph(graph);
    if view.node_count == 0 || view.edge_count == 0 {
        return HashMap::new();
    }

    let n = view.node_count;
    let m = view.edge_count as f64;
    let degrees: Vec<f64> = (0..n).map(|i| view.degree(i) as f64).collect();

    // Every node starts in its own community; sum_tot tracks the total
    // degree per community.
    let mut community: Vec<usize> = (0..n).collect();
    let mut sum_tot: Vec<f64> = degrees.clone();

    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    for pass in 0..MAX_PASSES {
        let mut moved = false;

        for &node in &order {
            let current = community[node];
            let k_i = degrees[node];

            // Links from this node into each adjacent community.
            let mut links: FxHashMap<usize, f64> = FxHashMap::default();
            for &neighbor in &view.adjacency[node] {
                *links.entry(community[neighbor]).or_insert(0.0) += 1.0;
            }

            // Detach the node before evaluating gains.
            sum_tot[current] -= k_i;

            let gain = |c: usize| -> f64 {
                let l = links.get(&c).copied().unwrap_or(0.0);
                l / m - sum_tot[c] * k_i / (2.0 * m * m)
            };

            let mut best = current;
            let mut best_gain = gain(current);
            let mut targets: Vec<usize> = links.keys().copied().collect();
            targets.sort_unstable();
            for c in targets {
                let g = gain(c);
                if g > best_gain + 1e-12 {
                    best = c;
                    best_gain = g;
                }
            }

            sum_tot[best] += k_i;
            if best != current {
                community[node] = best;
                moved = true;
            }
        }

        if !moved {
            debug!(passes = pass + 1, "community detection converged");
            break;
        }
    }

    // Relabel community ids densely, in node order.
    let mut relabel: FxHashMap<usize, usize> = FxHashMap::default();
    let mut assignment = HashMap::with_capacity(n);
    for idx in 0..n {
        let next_id = relabel.len();
        let dense = *relabel.entry(community[idx]).or_insert(next_id);
        if let Some(node) = graph.node(idx) {
            assignment.insert(node.id.clone(), dense);
        }
    }
    assignment
}
