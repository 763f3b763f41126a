//! Configuration loading and schema

pub mod file_config;
pub mod loader;

pub use file_config::{ExportConfig, FileConfig, ModelsConfig, ProvidersConfig, ScoringFileConfig};
pub use loader::{ConfigError, ConfigLoader};
