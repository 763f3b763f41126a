//! Presentation layer for ethica
//!
//! This crate contains CLI definitions, output formatters, progress
//! reporters, and the HTTP API surface.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use http::{AppState, router, serve};
pub use output::ConsoleFormatter;
pub use progress::ConsoleProgress;
