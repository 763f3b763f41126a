//! Progress reporting for pipeline execution

use ethica_application::ports::progress::ProgressNotifier;
use ethica_domain::{ImpactScore, Layer, Stage};

/// Prints layer banners and stage counters to the console
pub struct ConsoleProgress;

impl ConsoleProgress {
    fn stage_line(stage: &Stage) -> String {
        format!("[{}/{}] {}...", stage.number(), Stage::COUNT, stage.name())
    }
}

impl ProgressNotifier for ConsoleProgress {
    fn on_layer_start(&self, layer: &Layer) {
        println!("\n=== {} ===", layer.title());
    }

    fn on_stage_start(&self, stage: &Stage) {
        println!("{}", Self::stage_line(stage));
    }

    fn on_stage_complete(&self, _stage: &Stage) {}

    fn on_early_rejection(&self, impact: &ImpactScore) {
        println!(
            "\nREJECTED at purpose validation (impact score {:.1}%). No further stages run.",
            impact.score * 100.0
        );
    }

    fn on_collective_fallback(&self) {
        println!("  (collective provider unavailable, primary fills in)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_line_counts_from_one() {
        assert_eq!(
            ConsoleProgress::stage_line(&Stage::PurposeValidation),
            "[1/10] Purpose Validator..."
        );
        assert_eq!(
            ConsoleProgress::stage_line(&Stage::DecisionOrchestration),
            "[10/10] Decision Orchestrator..."
        );
    }
}
