//! Provider adapters implementing the `LlmGateway` port

pub mod gemini;
pub mod openai_compat;

use crate::config::FileConfig;
use ethica_application::{GatewayError, GatewaySet, ModelRoles};
use gemini::GeminiGateway;
use openai_compat::OpenAiCompatGateway;
use std::sync::Arc;
use tracing::info;

/// Build the full gateway set from loaded configuration.
///
/// Fails fast on missing required credentials so a half-configured run never
/// reaches stage 1. The collective role is skipped without error when its
/// key is absent.
pub fn build_gateways(config: &FileConfig) -> Result<GatewaySet, GatewayError> {
    let roles: ModelRoles = config.models.roles();

    let gemini_key = config
        .providers
        .gemini_api_key
        .as_deref()
        .ok_or_else(|| GatewayError::MissingCredentials("GEMINI_API_KEY".to_string()))?;
    let mistral_key = config
        .providers
        .mistral_api_key
        .as_deref()
        .ok_or_else(|| GatewayError::MissingCredentials("MISTRAL_API_KEY".to_string()))?;

    let primary = Arc::new(GeminiGateway::new(gemini_key, roles.primary)?);
    let arbiter = Arc::new(OpenAiCompatGateway::mistral(mistral_key, roles.arbiter)?);

    let collective = match (config.providers.deepseek_api_key.as_deref(), roles.collective) {
        (Some(key), Some(model)) => Some(Arc::new(OpenAiCompatGateway::deepseek(key, model)?)
            as Arc<dyn ethica_application::LlmGateway>),
        _ => {
            info!("No collective provider configured; primary will cover its role");
            None
        }
    };

    Ok(GatewaySet {
        primary,
        arbiter,
        collective,
    })
}
