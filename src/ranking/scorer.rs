//! Composite heuristic scoring
//!
//! Blends seniority, industry match, rate, and network influence into one
//! weighted score, scaled by an externally supplied semantic-similarity
//! value, with a rule-based reasoning string per candidate. Missing fields
//! never fail scoring; defaults substitute.

use crate::candidate::{Brief, Candidate, ScoredCandidate};
use crate::engine::GraphAnalysis;
use std::cmp::Ordering;
use std::collections::HashMap;

pub const WEIGHT_SENIORITY: f64 = 0.25;
pub const WEIGHT_INDUSTRY: f64 = 0.35;
pub const WEIGHT_RATE: f64 = 0.20;
pub const WEIGHT_NETWORK: f64 = 0.20;

/// Typical hourly-rate band used for rate normalization.
const RATE_MIN: f64 = 50.0;
const RATE_MAX: f64 = 600.0;

/// Fallback when the semantic-similarity provider has no entry.
pub const DEFAULT_SIMILARITY: f64 = 0.5;

/// Scores candidates against one brief. Holds an optional reference to the
/// graph analysis; without one, network influence contributes zero.
pub struct CompositeScorer<'a> {
    target_industry: String,
    target_sub_industry: String,
    #[allow(dead_code)]
    target_region: String,
    analysis: Option<&'a GraphAnalysis>,
}

impl<'a> CompositeScorer<'a> {
    pub fn new(brief: &Brief, analysis: Option<&'a GraphAnalysis>) -> Self {
        CompositeScorer {
            target_industry: brief.industry.as_deref().unwrap_or("").to_lowercase(),
            target_sub_industry: brief.sub_industry.as_deref().unwrap_or("").to_lowercase(),
            target_region: brief.region.as_deref().unwrap_or("").to_lowercase(),
            analysis,
        }
    }

    fn normalize(value: f64, min: f64, max: f64) -> f64 {
        if max <= min {
            return 1.0;
        }
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    }

    fn industry_match(&self, candidate: &Candidate) -> f64 {
        if self.target_industry.is_empty() {
            // No filter = neutral high.
            return 0.8;
        }
        let industry = candidate.industry.to_lowercase();
        let sub = candidate.sub_industry.to_lowercase();
        let mut score = 0.0;
        if !industry.is_empty() {
            if industry.contains(&self.target_industry) || self.target_industry.contains(&industry)
            {
                score = 0.7;
            }
            if !self.target_sub_industry.is_empty()
                && !sub.is_empty()
                && (sub.contains(&self.target_sub_industry)
                    || self.target_sub_industry.contains(&sub))
            {
                score = 1.0;
            }
        }
        score
    }

    /// Compute the composite score and its reasoning for one candidate.
    pub fn score(&self, candidate: &Candidate, semantic_similarity: f64) -> (f64, String) {
        let seniority_norm = Self::normalize(candidate.seniority_score, 0.0, 100.0);
        let industry_match = self.industry_match(candidate);
        let rate_norm = Self::normalize(candidate.predicted_rate, RATE_MIN, RATE_MAX);
        let network_norm = self
            .analysis
            .map(|a| a.influence(&candidate.id))
            .unwrap_or(0.0);

        let weighted = WEIGHT_SENIORITY * seniority_norm
            + WEIGHT_INDUSTRY * industry_match
            + WEIGHT_RATE * rate_norm
            + WEIGHT_NETWORK * network_norm;
        let composite = weighted * semantic_similarity.max(0.1);
        let composite = (composite * 10_000.0).round() / 10_000.0;

        let reasoning = self.reasoning(candidate, composite, industry_match, network_norm);
        (composite, reasoning)
    }

    fn reasoning(
        &self,
        candidate: &Candidate,
        composite: f64,
        industry_match: f64,
        network_norm: f64,
    ) -> String {
        let years = candidate.years_experience;
        let rate = candidate.predicted_rate;

        let mut parts: Vec<String> = Vec::new();
        if years >= 10 {
            parts.push(format!("{}+ years experience", years));
        } else if years >= 5 {
            parts.push(format!("{} years in field", years));
        }
        if !candidate.industry.is_empty() && !self.target_industry.is_empty() && industry_match > 0.5
        {
            parts.push(format!("industry match: {}", candidate.industry));
        }
        if rate != 0.0 && (100.0..=400.0).contains(&rate) {
            parts.push(format!("rate ${:.0}/hr aligned", rate));
        }
        if self.analysis.is_some() && network_norm > 0.3 {
            parts.push("strong network influence".to_string());
        }

        let prefix = if composite >= 0.6 {
            "High match"
        } else {
            "Moderate match"
        };
        if parts.is_empty() {
            format!("{} based on profile", prefix)
        } else {
            format!("{} due to {}", prefix, parts.join(", "))
        }
    }

    /// Score every candidate in the pool and sort descending by composite
    /// score. The sort is stable, so ties keep their original order.
    /// Candidates missing from the semantic map default to 0.5.
    pub fn rank(
        &self,
        pool: &[Candidate],
        semantic: &HashMap<String, f64>,
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = pool
            .iter()
            .map(|candidate| {
                let similarity = semantic
                    .get(&candidate.id)
                    .copied()
                    .unwrap_or(DEFAULT_SIMILARITY);
                let (confidence_score, reasoning) = self.score(candidate, similarity);
                let network_influence = self
                    .analysis
                    .map(|a| a.influence(&candidate.id))
                    .unwrap_or(0.0);
                ScoredCandidate {
                    candidate: candidate.clone(),
                    confidence_score,
                    reasoning,
                    semantic_similarity: similarity,
                    network_influence,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.confidence_score
                .partial_cmp(&a.confidence_score)
                .unwrap_or(Ordering::Equal)
        });
        scored
    }
}
