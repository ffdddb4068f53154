//! Mock provider implementation for testing.

use super::{PromptFeedback, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Text provider that replays one scripted outcome on every call.
pub struct MockTextProvider {
    outcome: Result<ProviderResponse, ProviderError>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    pub fn new(outcome: Result<ProviderResponse, ProviderError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `text`.
    pub fn answering(text: impl Into<String>) -> Self {
        Self::new(Ok(ProviderResponse {
            text: Some(text.into()),
            prompt_feedback: None,
        }))
    }

    /// Always reports the prompt as blocked.
    pub fn blocking(reason: impl Into<String>, message: Option<&str>) -> Self {
        Self::new(Ok(ProviderResponse {
            text: None,
            prompt_feedback: Some(PromptFeedback {
                block_reason: Some(reason.into()),
                block_reason_message: message.map(str::to_string),
            }),
        }))
    }

    /// Always fails with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self::new(Err(error))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.outcome.clone()
    }

    fn model(&self) -> &str {
        "mock"
    }
}
