//! Ports (interfaces) for the application layer
//!
//! Adapters in the infrastructure and presentation layers implement these.

pub mod llm_gateway;
pub mod progress;

pub use llm_gateway::{CompletionRequest, GatewayError, LlmGateway, ResponseFormat};
pub use progress::{NoProgress, ProgressNotifier};
