//! Generative-model provider abstraction.
//!
//! The gateway talks to the upstream model through [`TextProvider`], so the
//! Gemini REST client can be swapped for the scripted mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Failure category reported by a provider.
///
/// Variants are categories, not messages: callers branch on the variant and
/// only log the payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The upstream rejected the call arguments (this includes a bad API key).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Quota or rate limit exhausted.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// Any other error status returned by the upstream API.
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    /// The upstream answered but the body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The request never left the process.
    #[error("Client error: {0}")]
    Client(String),
}

/// Prompt-level safety feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
    pub block_reason_message: Option<String>,
}

/// Decoded result of a single generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderResponse {
    /// Concatenated text parts of the first candidate, if there is one.
    pub text: Option<String>,

    pub prompt_feedback: Option<PromptFeedback>,
}

/// Trait for single-shot text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send `prompt` as the whole user turn.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Identifier of the model behind this provider.
    fn model(&self) -> &str;
}
