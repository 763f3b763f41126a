//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.

use async_trait::async_trait;
use ethica_domain::Model;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned status {status}: {body}")]
    ProviderStatus { status: u16, body: String },

    #[error("Empty response from provider")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Output shape requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Ask the provider for a single JSON object
    Json,
    /// Plain prose, parsed by section headers downstream
    Text,
}

/// One completion call: a prompt plus sampling parameters.
///
/// The target model is fixed per adapter at construction time, so the
/// request carries only what varies between stages.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f64,
    pub format: ResponseFormat,
}

impl CompletionRequest {
    pub fn json(prompt: impl Into<String>, temperature: f64) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            format: ResponseFormat::Json,
        }
    }

    pub fn text(prompt: impl Into<String>, temperature: f64) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            format: ResponseFormat::Text,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to one LLM provider.
/// Implementations (adapters) live in the infrastructure layer, each bound
/// to a concrete model.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// The model this gateway is bound to
    fn model(&self) -> &Model;

    /// Send one completion request and return the raw response text
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}
