//! Candidate, brief, and ranking record types
//!
//! These are the boundary records exchanged with the data-access and API
//! layers. Fields that upstream sources routinely omit carry serde defaults
//! so a sparse record still scores.

use serde::{Deserialize, Serialize};

fn default_seniority() -> f64 {
    50.0
}

fn default_years() -> u32 {
    5
}

fn default_rate() -> f64 {
    200.0
}

fn default_confidence() -> f64 {
    0.5
}

fn default_similarity() -> f64 {
    0.5
}

/// A candidate profile being ranked against a search brief.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub sub_industry: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    /// Seniority on a 0-100 scale.
    #[serde(default = "default_seniority")]
    pub seniority_score: f64,
    #[serde(default = "default_years")]
    pub years_experience: u32,
    /// Hourly rate predicted by the external rate estimator.
    #[serde(default = "default_rate")]
    pub predicted_rate: f64,
    #[serde(default)]
    pub past_employers: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Candidate {
            id: id.into(),
            name: name.into(),
            industry: String::new(),
            sub_industry: String::new(),
            region: String::new(),
            country: String::new(),
            seniority_score: default_seniority(),
            years_experience: default_years(),
            predicted_rate: default_rate(),
            past_employers: Vec::new(),
            skills: Vec::new(),
        }
    }
}

/// The search filter driving scoring. All fields optional; an absent
/// industry makes the industry-match feature a neutral-high default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Brief {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub sub_industry: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

/// A candidate annotated with the composite score and its justification.
///
/// Produced by the composite scorer; the re-ranker replaces (never merges)
/// `confidence_score` with its refined value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(default = "default_confidence")]
    pub confidence_score: f64,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default = "default_similarity")]
    pub semantic_similarity: f64,
    #[serde(default)]
    pub network_influence: f64,
}

/// Final ranking result record (stable wire contract).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedExpert {
    pub expert_id: String,
    pub name: String,
    pub industry: String,
    pub confidence_score: f64,
    pub reasoning: String,
}

impl From<ScoredCandidate> for RankedExpert {
    fn from(scored: ScoredCandidate) -> Self {
        RankedExpert {
            expert_id: scored.candidate.id,
            name: scored.candidate.name,
            industry: scored.candidate.industry,
            confidence_score: scored.confidence_score,
            reasoning: scored.reasoning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_candidate_defaults() {
        let c: Candidate = serde_json::from_str(r#"{"id": "e1", "name": "Jane"}"#).unwrap();
        assert_eq!(c.seniority_score, 50.0);
        assert_eq!(c.years_experience, 5);
        assert_eq!(c.predicted_rate, 200.0);
        assert!(c.past_employers.is_empty());
        assert!(c.skills.is_empty());
    }

    #[test]
    fn test_scored_candidate_defaults() {
        let s: ScoredCandidate = serde_json::from_str(r#"{"id": "e1", "name": "Jane"}"#).unwrap();
        assert_eq!(s.confidence_score, 0.5);
        assert_eq!(s.semantic_similarity, 0.5);
        assert_eq!(s.network_influence, 0.0);
    }

    #[test]
    fn test_ranked_expert_projection() {
        let mut s: ScoredCandidate =
            serde_json::from_str(r#"{"id": "e1", "name": "Jane", "industry": "Finance"}"#).unwrap();
        s.confidence_score = 0.72;
        s.reasoning = "High match based on profile".to_string();

        let r = RankedExpert::from(s);
        assert_eq!(r.expert_id, "e1");
        assert_eq!(r.industry, "Finance");
        assert_eq!(r.confidence_score, 0.72);
    }
}
