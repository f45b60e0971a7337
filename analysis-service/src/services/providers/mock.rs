//! Mock provider implementation for testing.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

enum MockReply {
    Text(String),
    Failure(String),
    Unconfigured,
}

/// Text provider with a scripted reply that records every prompt it receives.
pub struct MockTextProvider {
    reply: MockReply,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Answer every prompt with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Text(text.into()))
    }

    /// Fail every prompt with an API error carrying `detail`.
    pub fn failing(detail: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Failure(detail.into()))
    }

    /// Behave like a provider started without credentials.
    pub fn unconfigured() -> Self {
        Self::with_reply(MockReply::Unconfigured)
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn call_count(&self) -> usize {
        self.prompts().len()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        match self.prompts.lock() {
            Ok(mut prompts) => prompts.push(prompt.to_string()),
            Err(poisoned) => poisoned.into_inner().push(prompt.to_string()),
        }

        match &self.reply {
            MockReply::Text(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            MockReply::Failure(detail) => Err(ProviderError::ApiError(detail.clone())),
            MockReply::Unconfigured => Err(ProviderError::NotConfigured(
                "Mock text provider not configured".to_string(),
            )),
        }
    }

    fn is_configured(&self) -> bool {
        !matches!(self.reply, MockReply::Unconfigured)
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}
