//! Scoring formulas
//!
//! Two deliberately separate formulas live here: the unweighted validation
//! gate ([`impact`]) and the weighted alignment aggregate ([`alignment`]).
//! They happen to share the default 0.60 threshold value; keep them apart.

pub mod alignment;
pub mod impact;

use crate::stage::results::{ImpactResponse, ImpactScore};

/// Thresholds for the two scoring formulas - independent tunables.
#[derive(Debug, Clone, Copy)]
pub struct ScoringConfig {
    /// Gate threshold for the unweighted impact score
    pub impact_threshold: f64,
    /// Pass threshold for the weighted alignment aggregate
    pub alignment_threshold: f64,
    pub weights: alignment::AlignmentWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            impact_threshold: impact::DEFAULT_IMPACT_THRESHOLD,
            alignment_threshold: alignment::DEFAULT_ALIGNMENT_THRESHOLD,
            weights: alignment::AlignmentWeights::default(),
        }
    }
}

/// Build the full stage-1 record from the raw validator response.
pub fn score_impact_response(response: ImpactResponse, config: &ScoringConfig) -> ImpactScore {
    let score = impact::impact_score(&response.dimensions);
    let valid = impact::manifestation_valid(score, &response.concerns, config.impact_threshold);
    let alignment = alignment::alignment_score(&response.dimensions, &config.weights);
    ImpactScore {
        score,
        alignment,
        aligned: alignment >= config.alignment_threshold,
        dimensions: response.dimensions,
        concerns: response.concerns,
        manifestation_valid: valid,
        reasoning: response.reasoning,
    }
}
