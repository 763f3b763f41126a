//! Analysis parameters - run-level tunables.
//!
//! [`AnalysisParams`] groups the static parameters that control one pipeline
//! run in [`RunAnalysisUseCase`](crate::use_cases::run_analysis::RunAnalysisUseCase).
//! These are application-layer concerns, not domain policy.

use ethica_domain::{Model, ScoringConfig};

/// Which model fills each provider role.
///
/// The primary carries most stages; the arbiter handles insight generation;
/// the collective provider, when configured, supplies the collective-focused
/// perspective and falls back to the primary on failure.
#[derive(Debug, Clone)]
pub struct ModelRoles {
    pub primary: Model,
    pub arbiter: Model,
    pub collective: Option<Model>,
}

impl Default for ModelRoles {
    fn default() -> Self {
        Self {
            primary: Model::GeminiFlash,
            arbiter: Model::MistralLarge,
            collective: Some(Model::DeepseekChat),
        }
    }
}

/// Run-level tunables for one analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalysisParams {
    /// Thresholds and weights for the two scoring formulas
    pub scoring: ScoringConfig,
}

impl AnalysisParams {
    pub fn with_impact_threshold(mut self, threshold: f64) -> Self {
        self.scoring.impact_threshold = threshold;
        self
    }

    pub fn with_alignment_threshold(mut self, threshold: f64) -> Self {
        self.scoring.alignment_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roles() {
        let roles = ModelRoles::default();
        assert_eq!(roles.primary, Model::GeminiFlash);
        assert_eq!(roles.arbiter, Model::MistralLarge);
        assert_eq!(roles.collective, Some(Model::DeepseekChat));
    }

    #[test]
    fn test_builder_overrides_thresholds() {
        let params = AnalysisParams::default()
            .with_impact_threshold(0.5)
            .with_alignment_threshold(0.7);
        assert_eq!(params.scoring.impact_threshold, 0.5);
        assert_eq!(params.scoring.alignment_threshold, 0.7);
    }
}
