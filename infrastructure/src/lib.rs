//! Infrastructure layer for ethica
//!
//! Adapters for the application layer's ports: LLM provider clients,
//! configuration loading, and result export.

pub mod config;
pub mod export;
pub mod providers;

pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use export::{ExportError, JsonExporter};
pub use providers::{build_gateways, gemini::GeminiGateway, openai_compat::OpenAiCompatGateway};
