//! Visualization export
//!
//! Serializes the graph plus its signal maps into the node/link format the
//! force-graph frontend consumes. This schema is a stable wire contract.

use crate::graph::{EdgeKind, Graph, NodeGroup};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A node in the export schema. `val` drives visual sizing (1-51).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: String,
    pub label: String,
    pub group: NodeGroup,
    pub val: u32,
    /// Cluster id, -1 when the node is unassigned.
    pub community: i64,
}

/// A link in the export schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportLink {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub link_type: String,
}

/// Wire format: `{nodes: [...], links: [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<ExportNode>,
    pub links: Vec<ExportLink>,
}

/// Serialize the graph with its centrality and community maps.
///
/// Known quirk, kept for frontend compatibility: only HAS_SKILL survives
/// the export with its own type. WORKED_AT, SHARED_EMPLOYER,
/// SAME_SUBINDUSTRY, and IN_INDUSTRY all collapse to "ALUMNI", so a
/// consumer that needs to tell those apart must read the graph itself,
/// not this export.
pub fn export_graph(
    graph: &Graph,
    centrality: &[f64],
    communities: &HashMap<String, usize>,
) -> GraphExport {
    let max_score = centrality.iter().fold(0.0_f64, |acc, &s| acc.max(s));

    let nodes = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(idx, node)| {
            let raw = centrality.get(idx).copied().unwrap_or(0.0);
            let normalized = if max_score > 0.0 { raw / max_score } else { 0.0 };
            let val = ((normalized * 50.0).floor() as i64 + 1).max(1) as u32;
            ExportNode {
                id: node.id.clone(),
                label: node.label.clone(),
                group: node.group,
                val,
                community: communities.get(&node.id).map(|&c| c as i64).unwrap_or(-1),
            }
        })
        .collect();

    let links = graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let source = graph.node(edge.source)?;
            let target = graph.node(edge.target)?;
            let link_type = match edge.kind {
                EdgeKind::HasSkill => "HAS_SKILL",
                _ => "ALUMNI",
            };
            Some(ExportLink {
                source: source.id.clone(),
                target: target.id.clone(),
                link_type: link_type.to_string(),
            })
        })
        .collect();

    GraphExport { nodes, links }
}
