//! Gemini provider adapter
//!
//! Talks to the Generative Language REST API (`generateContent`). JSON-mode
//! requests set `responseMimeType` so the model returns a bare object
//! instead of fenced markdown.

use async_trait::async_trait;
use ethica_application::{CompletionRequest, GatewayError, LlmGateway, ResponseFormat};
use ethica_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Gateway adapter for Gemini models
pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: Model,
}

impl GeminiGateway {
    pub fn new(api_key: impl Into<String>, model: Model) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Other(e.to_string()))?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model,
        })
    }

    /// Point the adapter at a different endpoint (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

fn build_request(request: &CompletionRequest) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: &request.prompt,
            }],
        }],
        generation_config: GenerationConfig {
            temperature: request.temperature,
            response_mime_type: match request.format {
                ResponseFormat::Json => Some("application/json"),
                ResponseFormat::Text => None,
            },
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
impl LlmGateway for GeminiGateway {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model.as_str(),
            self.api_key
        );
        debug!(model = %self.model, temperature = request.temperature, "Gemini call");

        let response = self
            .client
            .post(&url)
            .json(&build_request(&request))
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

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("invalid response body: {e}")))?;

        let text: String = parsed
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(text)
    }
}
