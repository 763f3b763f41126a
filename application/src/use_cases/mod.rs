//! Use cases - application orchestration logic

pub mod run_analysis;

pub use run_analysis::{GatewaySet, RunAnalysisError, RunAnalysisUseCase};
