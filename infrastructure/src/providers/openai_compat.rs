//! OpenAI-compatible chat adapter
//!
//! Mistral and DeepSeek expose the same `/chat/completions` surface, so one
//! adapter covers both; only the base URL, credentials, and timeout differ.

use async_trait::async_trait;
use ethica_application::{CompletionRequest, GatewayError, LlmGateway, ResponseFormat};
use ethica_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1";
const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
/// The collective provider is optional; a shorter timeout keeps a slow or
/// unreachable endpoint from stalling the whole stage before fallback.
const COLLECTIVE_TIMEOUT: Duration = Duration::from_secs(60);

/// Gateway adapter for OpenAI-compatible chat endpoints
pub struct OpenAiCompatGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: Model,
}

impl OpenAiCompatGateway {
    fn build(
        base_url: &str,
        api_key: impl Into<String>,
        model: Model,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Other(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.into(),
            model,
        })
    }

    pub fn mistral(api_key: impl Into<String>, model: Model) -> Result<Self, GatewayError> {
        Self::build(MISTRAL_BASE_URL, api_key, model, DEFAULT_TIMEOUT)
    }

    pub fn deepseek(api_key: impl Into<String>, model: Model) -> Result<Self, GatewayError> {
        Self::build(DEEPSEEK_BASE_URL, api_key, model, COLLECTIVE_TIMEOUT)
    }

    /// Point the adapter at a different endpoint (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormatSpec>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormatSpec {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

fn build_request<'a>(model: &'a Model, request: &'a CompletionRequest) -> ChatRequest<'a> {
    ChatRequest {
        model: model.as_str(),
        messages: vec![ChatMessage {
            role: "user",
            content: &request.prompt,
        }],
        temperature: request.temperature,
        response_format: match request.format {
            ResponseFormat::Json => Some(ResponseFormatSpec {
                kind: "json_object",
            }),
            ResponseFormat::Text => None,
        },
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatGateway {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %self.model, temperature = request.temperature, "Chat call");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&build_request(&self.model, &request))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::ProviderStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("invalid response body: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_requests_json_object() {
        let request = CompletionRequest::json("evaluate", 0.2);
        let body = serde_json::to_value(build_request(&Model::MistralLarge, &request)).unwrap();
        assert_eq!(body["model"], "mistral-large-latest");
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][0]["role"], "user");
    }

    #[test]
    fn test_text_mode_omits_response_format() {
        let request = CompletionRequest::text("discuss", 0.7);
        let body = serde_json::to_value(build_request(&Model::DeepseekChat, &request)).unwrap();
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn test_response_content_extraction() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "the answer"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.choices[0].message.content, "the answer");
    }
}
