//! Progress notification port
//!
//! Defines the interface for reporting progress during a pipeline run.

use ethica_domain::{ImpactScore, Layer, Stage};

/// Callback for progress updates during pipeline execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when execution enters a new layer
    fn on_layer_start(&self, layer: &Layer);

    /// Called when a stage starts
    fn on_stage_start(&self, stage: &Stage);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: &Stage);

    /// Called when stage 1 fails validation and the run short-circuits
    fn on_early_rejection(&self, _impact: &ImpactScore) {}

    /// Called when the collective provider fails and the primary fills in
    fn on_collective_fallback(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_layer_start(&self, _layer: &Layer) {}
    fn on_stage_start(&self, _stage: &Stage) {}
    fn on_stage_complete(&self, _stage: &Stage) {}
}
