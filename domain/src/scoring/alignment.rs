//! Weighted alignment scoring
//!
//! Computes a single aggregate alignment percentage from the five dimension
//! scores using unequal, hand-tuned criterion weights. Each score is
//! normalized per criterion with `(score + 10) / 20` before weighting - not
//! summed as a block like the validation-gate formula in [`super::impact`].

use crate::stage::results::ImpactDimensions;
use serde::{Deserialize, Serialize};

/// Default pass/fail threshold for the weighted alignment judgment.
///
/// Numerically equal to the impact threshold but an independent tunable.
pub const DEFAULT_ALIGNMENT_THRESHOLD: f64 = 0.60;

/// Per-criterion weights for the alignment aggregate.
///
/// The hierarchy is deliberate: suffering reduction dominates, truth
/// alignment second, free-will respect lowest because it tolerates real
/// trade-offs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlignmentWeights {
    pub reduces_suffering: f64,
    pub aligned_with_truth: f64,
    pub justice_mercy_balance: f64,
    pub promotes_harmony: f64,
    pub respects_free_will: f64,
}

impl Default for AlignmentWeights {
    fn default() -> Self {
        Self {
            reduces_suffering: 0.35,
            aligned_with_truth: 0.25,
            justice_mercy_balance: 0.20,
            promotes_harmony: 0.15,
            respects_free_will: 0.05,
        }
    }
}

/// Normalize one criterion score from [-10, +10] to [0, 1]
fn normalize(score: i32) -> f64 {
    (score.clamp(-10, 10) as f64 + 10.0) / 20.0
}

/// Weighted alignment percentage in [0, 1].
///
/// Dimension mapping: harm_reduction feeds the suffering criterion,
/// truthfulness the truth criterion, justice_balance the justice/mercy
/// criterion, social_harmony the harmony criterion, autonomy_respect the
/// free-will criterion.
pub fn alignment_score(dimensions: &ImpactDimensions, weights: &AlignmentWeights) -> f64 {
    normalize(dimensions.harm_reduction) * weights.reduces_suffering
        + normalize(dimensions.truthfulness) * weights.aligned_with_truth
        + normalize(dimensions.justice_balance) * weights.justice_mercy_balance
        + normalize(dimensions.social_harmony) * weights.promotes_harmony
        + normalize(dimensions.autonomy_respect) * weights.respects_free_will
}
