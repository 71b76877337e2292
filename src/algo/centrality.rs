//! Damped power-iteration centrality
//!
//! Computes an eigenvector-style importance score per node over the
//! directed graph. Probability mass of dangling nodes (no outgoing edges)
//! is redistributed uniformly each sweep, so sinks never drain the whole
//! graph toward zero and disconnected components converge independently.

use crate::graph::Graph;
use thiserror::Error;
use tracing::debug;

/// Centrality iteration parameters.
pub struct CentralityConfig {
    /// Damping factor (usually 0.85).
    pub damping: f64,
    /// Hard ceiling on sweeps; iteration stops here even without
    /// convergence.
    pub max_iterations: usize,
    /// L1 convergence tolerance between sweeps.
    pub tolerance: f64,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Iteration produced a non-finite score; callers degrade to zero scores.
#[derive(Error, Debug, PartialEq)]
pub enum CentralityError {
    #[error("non-finite score encountered during power iteration")]
    Numerical,
}

/// Compute raw centrality scores, one per dense node index. Scores form a
/// probability distribution (sum 1) over the graph's nodes; an empty graph
/// yields an empty vector.
pub fn power_centrality(
    graph: &Graph,
    config: &CentralityConfig,
) -> Result<Vec<f64>, CentralityError> {
    let n = graph.node_count();
    if n == 0 {
        return Ok(Vec::new());
    }

    let incoming = graph.incoming();
    let out_degrees = graph.out_degrees();

    let uniform = 1.0 / n as f64;
    let mut scores = vec![uniform; n];
    let mut next = vec![0.0; n];

    let d = config.damping;
    let base = (1.0 - d) * uniform;

    for iteration in 0..config.max_iterations {
        let dangling_mass: f64 = (0..n)
            .filter(|&i| out_degrees[i] == 0)
            .map(|i| scores[i])
            .sum();
        let redistributed = d * dangling_mass * uniform;

        let mut total_diff = 0.0;
        for i in 0..n {
            let mut sum_incoming = 0.0;
            for &source in &incoming[i] {
                sum_incoming += scores[source] / out_degrees[source] as f64;
            }
            next[i] = base + redistributed + d * sum_incoming;
            if !next[i].is_finite() {
                return Err(CentralityError::Numerical);
            }
            total_diff += (next[i] - scores[i]).abs();
        }

        scores.copy_from_slice(&next);

        if total_diff < config.tolerance {
            debug!(iterations = iteration + 1, "centrality converged");
            break;
        }
    }

    Ok(scores)
}
