//! Analysis metrics accumulator
//!
//! Running tallies of self-observation signals collected while parsing stage
//! responses. The accumulator travels with the run and is returned in the
//! aggregate result - stage invocation itself stays a pure function of its
//! inputs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    /// Times a stage explicitly acknowledged uncertainty
    pub uncertainty_acknowledgments: u32,
    /// Times second-order effects were analyzed
    pub second_order_analyses: u32,
    /// Times the emergency stakeholder extraction had to run
    pub emergency_extractions: u32,
    /// Times insights were back-filled from an adjacent analysis field
    pub insight_backfills: u32,
}

impl AnalysisMetrics {
    pub fn record_uncertainties(&mut self, count: usize) {
        self.uncertainty_acknowledgments += count as u32;
    }

    pub fn record_second_order_analysis(&mut self) {
        self.second_order_analyses += 1;
    }

    pub fn record_emergency_extraction(&mut self) {
        self.emergency_extractions += 1;
    }

    pub fn record_insight_backfill(&mut self) {
        self.insight_backfills += 1;
    }

    /// Whether any fallback tier had to fill in for missing content
    pub fn used_fallbacks(&self) -> bool {
        self.emergency_extractions > 0 || self.insight_backfills > 0
    }
}
