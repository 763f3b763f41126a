//! Unweighted five-dimension impact scoring and the validation gate
//!
//! This is the stage-1 formula: sum the five dimension scores (-10..=+10
//! each) and renormalize the block with `(sum + 50) / 100`. It is distinct
//! from the weighted alignment formula in [`super::alignment`] - the two
//! share a default threshold value but nothing else, and they stay
//! separately configurable.

use crate::stage::results::{Concern, ImpactDimensions};

/// Default minimum impact score for approval
pub const DEFAULT_IMPACT_THRESHOLD: f64 = 0.60;

/// Normalize the summed five-dimension block to [0, 1].
///
/// sum = -50 maps to 0.0, sum = 0 to 0.5, sum = +50 to 1.0.
pub fn impact_score(dimensions: &ImpactDimensions) -> f64 {
    ((dimensions.sum() as f64 + 50.0) / 100.0).clamp(0.0, 1.0)
}

/// The stage-1 validation gate.
///
/// Valid when the impact score meets the threshold AND no reported concern
/// carries CRITICAL severity; a single critical concern vetoes regardless of
/// score.
pub fn manifestation_valid(score: f64, concerns: &[Concern], threshold: f64) -> bool {
    score >= threshold && !concerns.iter().any(Concern::is_critical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::results::Severity;

    fn dims(h: i32, a: i32, s: i32, j: i32, t: i32) -> ImpactDimensions {
        ImpactDimensions {
            harm_reduction: h,
            autonomy_respect: a,
            social_harmony: s,
            justice_balance: j,
            truthfulness: t,
        }
    }

    #[test]
    fn test_normalization_fixed_points() {
        assert_eq!(impact_score(&dims(-10, -10, -10, -10, -10)), 0.0);
        assert_eq!(impact_score(&dims(0, 0, 0, 0, 0)), 0.5);
        assert_eq!(impact_score(&dims(10, 10, 10, 10, 10)), 1.0);
    }

    #[test]
    fn test_normalization_stays_in_unit_interval() {
        for sum_part in [-10, -7, -3, 0, 4, 9, 10] {
            let score = impact_score(&dims(sum_part, 10, -10, 3, -3));
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_gate_threshold() {
        assert!(manifestation_valid(0.60, &[], DEFAULT_IMPACT_THRESHOLD));
        assert!(!manifestation_valid(0.59, &[], DEFAULT_IMPACT_THRESHOLD));
    }

    #[test]
    fn test_critical_concern_vetoes_high_score() {
        let concerns = vec![Concern::new(
            "privacy",
            Severity::Critical,
            "irreversible mass data collection",
        )];
        assert!(!manifestation_valid(0.95, &concerns, DEFAULT_IMPACT_THRESHOLD));
    }

    #[test]
    fn test_non_critical_concerns_do_not_veto() {
        let concerns = vec![
            Concern::new("cost", Severity::High, "expensive rollout"),
            Concern::new("timing", Severity::Low, "slow start"),
        ];
        assert!(manifestation_valid(0.75, &concerns, DEFAULT_IMPACT_THRESHOLD));
    }
}
