//! Knowledge-graph construction from candidate records
//!
//! Turns a pool of candidates into a typed directed graph:
//! - one Expert node per candidate
//! - Company nodes + WORKED_AT edges from past employers
//! - Skill nodes + HAS_SKILL edges from skills (industry/sub-industry used
//!   as fallback skills when a candidate lists none)
//! - Industry nodes + IN_INDUSTRY edges from industry and sub-industry
//! - Expert-Expert SHARED_EMPLOYER / SAME_SUBINDUSTRY edge pairs
//!
//! Malformed or blank strings are skipped silently; missing data degrades
//! to fewer nodes and edges, never an error. Construction is deterministic,
//! so rebuilding from identical input yields identical ids and edge counts.

use super::store::Graph;
use super::types::{expert_node_id, node_id_for, EdgeKind, NodeGroup};
use crate::candidate::Candidate;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Default ceiling on the number of candidates folded into one graph.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 500;

/// Build a fresh graph from an ordered candidate pool, considering at most
/// `limit` candidates.
///
/// Expert-Expert relationships are derived through inverted indices
/// (employer -> candidates, sub-industry -> candidates) and connected only
/// within buckets. The naive formulation enumerates every unordered pair of
/// candidates and is quadratic in pool size; bucketing keeps the cost near
/// linear in total employer/sub-industry occurrences while producing the
/// same edge counts.
pub fn build_graph(candidates: &[Candidate], limit: usize) -> Graph {
    let pool = &candidates[..candidates.len().min(limit)];
    let mut graph = Graph::new();

    // Dense expert index per pool position, fixed before pairwise wiring.
    let mut expert_indices = Vec::with_capacity(pool.len());

    for candidate in pool {
        let expert_idx = graph.intern_node(
            expert_node_id(&candidate.id),
            candidate.name.clone(),
            NodeGroup::Expert,
        );
        expert_indices.push(expert_idx);

        for employer in &candidate.past_employers {
            let name = employer.trim();
            if name.is_empty() {
                continue;
            }
            let company_idx =
                graph.intern_node(node_id_for(NodeGroup::Company, name), name, NodeGroup::Company);
            graph.add_edge(expert_idx, company_idx, EdgeKind::WorkedAt);
        }

        for skill in &candidate.skills {
            let name = skill.trim();
            if name.is_empty() {
                continue;
            }
            let skill_idx =
                graph.intern_node(node_id_for(NodeGroup::Skill, name), name, NodeGroup::Skill);
            graph.add_edge(expert_idx, skill_idx, EdgeKind::HasSkill);
        }

        // No explicit skills at all: fall back to industry labels as a
        // weak skill signal.
        if candidate.skills.is_empty() {
            for fallback in [&candidate.industry, &candidate.sub_industry] {
                let name = fallback.trim();
                if name.is_empty() {
                    continue;
                }
                let skill_idx =
                    graph.intern_node(node_id_for(NodeGroup::Skill, name), name, NodeGroup::Skill);
                graph.add_edge(expert_idx, skill_idx, EdgeKind::HasSkill);
            }
        }
    }

    // Industry membership edges, one per non-blank industry/sub-industry.
    for (pos, candidate) in pool.iter().enumerate() {
        for industry in [&candidate.industry, &candidate.sub_industry] {
            let name = industry.trim();
            if name.is_empty() {
                continue;
            }
            let industry_idx = graph.intern_node(
                node_id_for(NodeGroup::Industry, name),
                name,
                NodeGroup::Industry,
            );
            graph.add_edge(expert_indices[pos], industry_idx, EdgeKind::InIndustry);
        }
    }

    connect_related_experts(&mut graph, pool, &expert_indices);

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        candidates = pool.len(),
        "knowledge graph built"
    );
    graph
}

/// Wire bidirectional Expert-Expert edges for candidates that share a past
/// employer (case-insensitive) or an identical non-blank sub-industry.
/// Each unordered pair gets at most one edge pair per relation kind, no
/// matter how many employers overlap.
fn connect_related_experts(graph: &mut Graph, pool: &[Candidate], expert_indices: &[usize]) {
    let mut employer_buckets: IndexMap<String, Vec<usize>> = IndexMap::new();
    let mut sub_industry_buckets: IndexMap<String, Vec<usize>> = IndexMap::new();

    for (pos, candidate) in pool.iter().enumerate() {
        let mut seen = FxHashSet::default();
        for employer in &candidate.past_employers {
            let key = employer.trim().to_lowercase();
            if key.is_empty() || !seen.insert(key.clone()) {
                continue;
            }
            employer_buckets.entry(key).or_default().push(pos);
        }

        let sub = candidate.sub_industry.trim().to_lowercase();
        if !sub.is_empty() {
            sub_industry_buckets.entry(sub).or_default().push(pos);
        }
    }

    emit_bucket_pairs(graph, expert_indices, &employer_buckets, EdgeKind::SharedEmployer);
    emit_bucket_pairs(
        graph,
        expert_indices,
        &sub_industry_buckets,
        EdgeKind::SameSubIndustry,
    );
}

fn emit_bucket_pairs(
    graph: &mut Graph,
    expert_indices: &[usize],
    buckets: &IndexMap<String, Vec<usize>>,
    kind: EdgeKind,
) {
    let mut connected: FxHashSet<(usize, usize)> = FxHashSet::default();
    for members in buckets.values() {
        for (i, &a) in members.iter().enumerate() {
            for &b in &members[i + 1..] {
                if !connected.insert((a, b)) {
                    continue;
                }
                graph.add_edge(expert_indices[a], expert_indices[b], kind);
                graph.add_edge(expert_indices[b], expert_indices[a], kind);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, name: &str) -> Candidate {
        Candidate::new(id, name)
    }

    #[test]
    fn test_empty_pool_yields_empty_graph() {
        let graph = build_graph(&[], DEFAULT_CANDIDATE_LIMIT);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_expert_company_skill_nodes() {
        let mut c = candidate("e1", "Jane Smith");
        c.past_employers = vec!["Goldman Sachs".into(), "McKinsey".into()];
        c.skills = vec!["M&A".into(), "Strategy".into()];

        let graph = build_graph(&[c], DEFAULT_CANDIDATE_LIMIT);

        assert!(graph.index_of("expert_e1").is_some());
        assert!(graph.index_of("company_Goldman_Sachs").is_some());
        assert!(graph.index_of("company_McKinsey").is_some());
        assert!(graph.index_of("skill_M&A").is_some());
        assert!(graph.index_of("skill_Strategy").is_some());
    }

    #[test]
    fn test_blank_strings_skipped() {
        let mut c = candidate("e1", "Jane");
        c.past_employers = vec!["  ".into(), String::new(), "Acme".into()];
        c.skills = vec!["".into()];

        let graph = build_graph(&[c], DEFAULT_CANDIDATE_LIMIT);

        // One expert, one company; the blank skill produces nothing and,
        // because the skills list is non-empty, no fallback fires either.
        assert_eq!(graph.node_count(), 2);
        assert!(graph.index_of("company_Acme").is_some());
    }

    #[test]
    fn test_industry_fallback_skills() {
        let mut c = candidate("e1", "Jane");
        c.industry = "Finance".into();
        c.sub_industry = "M&A".into();

        let graph = build_graph(&[c], DEFAULT_CANDIDATE_LIMIT);

        assert!(graph.index_of("skill_Finance").is_some());
        assert!(graph.index_of("skill_M&A").is_some());
        // Industry membership nodes exist alongside the fallback skills.
        assert!(graph.index_of("industry_Finance").is_some());
        assert!(graph.index_of("industry_M&A").is_some());
    }

    #[test]
    fn test_shared_employer_edge_pair() {
        let mut a = candidate("e1", "Jane");
        a.past_employers = vec!["Goldman Sachs".into()];
        let mut b = candidate("e2", "John");
        b.past_employers = vec!["goldman sachs ".into()];

        let graph = build_graph(&[a, b], DEFAULT_CANDIDATE_LIMIT);

        let e1 = graph.index_of("expert_e1").unwrap();
        let e2 = graph.index_of("expert_e2").unwrap();
        let forward = graph
            .edges()
            .iter()
            .any(|e| e.kind == EdgeKind::SharedEmployer && e.source == e1 && e.target == e2);
        let backward = graph
            .edges()
            .iter()
            .any(|e| e.kind == EdgeKind::SharedEmployer && e.source == e2 && e.target == e1);
        assert!(forward && backward);
    }

    #[test]
    fn test_multiple_shared_employers_single_edge_pair() {
        let mut a = candidate("e1", "Jane");
        a.past_employers = vec!["Acme".into(), "Globex".into()];
        let mut b = candidate("e2", "John");
        b.past_employers = vec!["Acme".into(), "Globex".into()];

        let graph = build_graph(&[a, b], DEFAULT_CANDIDATE_LIMIT);

        let shared = graph
            .edges()
            .iter()
            .filter(|e| e.kind == EdgeKind::SharedEmployer)
            .count();
        assert_eq!(shared, 2); // one bidirectional pair
    }

    #[test]
    fn test_same_sub_industry_edge_pair() {
        let mut a = candidate("e1", "Jane");
        a.sub_industry = "M&A".into();
        let mut b = candidate("e2", "John");
        b.sub_industry = "m&a".into();
        let mut c = candidate("e3", "Ada");
        c.sub_industry = String::new();

        let graph = build_graph(&[a, b, c], DEFAULT_CANDIDATE_LIMIT);

        let same_sub = graph
            .edges()
            .iter()
            .filter(|e| e.kind == EdgeKind::SameSubIndustry)
            .count();
        // Blank sub-industries never match each other.
        assert_eq!(same_sub, 2);
    }

    #[test]
    fn test_idempotent_rebuild() {
        let mut a = candidate("e1", "Jane");
        a.past_employers = vec!["Acme".into()];
        a.skills = vec!["Strategy".into()];
        a.industry = "Finance".into();
        let mut b = candidate("e2", "John");
        b.past_employers = vec!["Acme".into()];

        let pool = vec![a, b];
        let first = build_graph(&pool, DEFAULT_CANDIDATE_LIMIT);
        let second = build_graph(&pool, DEFAULT_CANDIDATE_LIMIT);

        assert_eq!(first.node_count(), second.node_count());
        assert_eq!(first.edge_count(), second.edge_count());
        let ids_first: Vec<&str> = first.nodes().iter().map(|n| n.id.as_str()).collect();
        let ids_second: Vec<&str> = second.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids_first, ids_second);
    }

    #[test]
    fn test_candidate_limit() {
        let pool: Vec<Candidate> = (0..10)
            .map(|i| candidate(&format!("e{}", i), "X"))
            .collect();
        let graph = build_graph(&pool, 3);
        assert_eq!(graph.node_count(), 3);
    }
}
