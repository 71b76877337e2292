//! Core type definitions for the knowledge graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
    Expert,
    Company,
    Skill,
    Industry,
}

impl NodeGroup {
    /// Prefix used when deriving deterministic node ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            NodeGroup::Expert => "expert",
            NodeGroup::Company => "company",
            NodeGroup::Skill => "skill",
            NodeGroup::Industry => "industry",
        }
    }
}

impl fmt::Display for NodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id_prefix())
    }
}

/// Relationship type carried by a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum EdgeKind {
    WorkedAt,
    HasSkill,
    SharedEmployer,
    SameSubIndustry,
    InIndustry,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::WorkedAt => "WORKED_AT",
            EdgeKind::HasSkill => "HAS_SKILL",
            EdgeKind::SharedEmployer => "SHARED_EMPLOYER",
            EdgeKind::SameSubIndustry => "SAME_SUBINDUSTRY",
            EdgeKind::InIndustry => "IN_INDUSTRY",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node in the knowledge graph. Immutable once interned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Stable, deterministic identifier (e.g. `expert_e1`, `company_Acme`).
    pub id: String,
    /// Display name.
    pub label: String,
    pub group: NodeGroup,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, group: NodeGroup) -> Self {
        Node {
            id: id.into(),
            label: label.into(),
            group,
        }
    }
}

/// A directed, typed edge. `source` and `target` are dense indices into the
/// owning graph's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub kind: EdgeKind,
}

/// Derive the deterministic node id for a named entity: the group prefix
/// plus the name with spaces replaced by underscores.
pub fn node_id_for(group: NodeGroup, name: &str) -> String {
    format!("{}_{}", group.id_prefix(), name.replace(' ', "_"))
}

/// Deterministic node id for an expert, keyed by the candidate id.
pub fn expert_node_id(candidate_id: &str) -> String {
    format!("expert_{}", candidate_id)
}
