//! Gemini AI provider implementation.
//!
//! Calls `models/{model}:generateContent` on the Gemini REST API and decodes
//! the answer, the prompt feedback and Google's error envelope.

use super::{PromptFeedback, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    /// Base URL up to and including the API version, without trailing slash.
    pub api_base: String,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ProviderError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the given model method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base, self.config.model, method
        )
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    ProviderError::Client(e.to_string())
                } else {
                    ProviderError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            return Err(categorize_error(status, &body));
        }

        decode_response(&body)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

/// Map a non-success reply onto a failure category.
///
/// The canonical status in Google's error envelope is authoritative; the HTTP
/// code is only consulted when the body carries none.
pub(crate) fn categorize_error(status: StatusCode, body: &str) -> ProviderError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let message = envelope
        .as_ref()
        .and_then(|e| e.error.message.clone())
        .unwrap_or_else(|| format!("Gemini API error {}: {}", status, body));
    let canonical = envelope.and_then(|e| e.error.status);

    match canonical.as_deref() {
        Some("INVALID_ARGUMENT") => ProviderError::InvalidArgument(message),
        Some("PERMISSION_DENIED") => ProviderError::PermissionDenied(message),
        Some("RESOURCE_EXHAUSTED") => ProviderError::ResourceExhausted(message),
        Some(_) => ProviderError::ApiError(message),
        None => match status {
            StatusCode::BAD_REQUEST => ProviderError::InvalidArgument(message),
            StatusCode::FORBIDDEN => ProviderError::PermissionDenied(message),
            StatusCode::TOO_MANY_REQUESTS => ProviderError::ResourceExhausted(message),
            _ => ProviderError::ApiError(message),
        },
    }
}

/// Decode a successful `generateContent` body.
pub(crate) fn decode_response(body: &str) -> Result<ProviderResponse, ProviderError> {
    let api_response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    let text = api_response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| {
            let texts: Vec<&str> = content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect();
            if texts.is_empty() {
                None
            } else {
                Some(texts.concat())
            }
        });

    if let Some(reason) = api_response
        .candidates
        .first()
        .and_then(|c| c.finish_reason.as_deref())
    {
        tracing::debug!(finish_reason = reason, "Gemini candidate finished");
    }

    let prompt_feedback = api_response.prompt_feedback.map(|f| PromptFeedback {
        block_reason: f.block_reason,
        block_reason_message: f.block_reason_message,
    });

    Ok(ProviderResponse {
        text,
        prompt_feedback,
    })
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

/// Only text parts matter here; other part kinds decode with `text: None`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedbackWire>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedbackWire {
    #[serde(default)]
    block_reason: Option<String>,
    #[serde(default)]
    block_reason_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}
