//! Application layer for ethica
//!
//! This crate contains use cases and ports (interfaces). It orchestrates
//! domain logic without knowing about concrete LLM providers, transports,
//! or output devices - those are adapters behind the ports.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{AnalysisParams, ModelRoles};
pub use ports::{
    CompletionRequest, GatewayError, LlmGateway, NoProgress, ProgressNotifier, ResponseFormat,
};
pub use use_cases::{GatewaySet, RunAnalysisError, RunAnalysisUseCase};
