//! Document analysis: prompt, upstream call, cleanup.

use crate::models::LegalAnalysis;
use crate::services::prompt::{build_prompt, strip_code_fences};
use crate::services::providers::{FinishReason, ProviderError, TextProvider};
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;

pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "Upstream AI service is currently unreachable.";
pub const MALFORMED_OUTPUT_MESSAGE: &str = "Upstream AI service returned malformed data";

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Inference engine failure: {0}")]
    Upstream(#[from] ProviderError),

    #[error("Upstream returned malformed data: {0}")]
    MalformedOutput(#[source] serde_json::Error),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Upstream(_) => {
                AppError::ServiceUnavailable(UPSTREAM_UNAVAILABLE_MESSAGE.to_string())
            }
            AnalysisError::MalformedOutput(_) => {
                AppError::BadGateway(MALFORMED_OUTPUT_MESSAGE.to_string())
            }
        }
    }
}

#[derive(Clone)]
pub struct DocumentAnalyzer {
    provider: Arc<dyn TextProvider>,
    strict_output: bool,
}

impl DocumentAnalyzer {
    pub fn new(provider: Arc<dyn TextProvider>, strict_output: bool) -> Self {
        Self {
            provider,
            strict_output,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.provider.is_configured()
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Run one extraction and return the cleaned model output.
    ///
    /// In strict mode the output must also parse as `LegalAnalysis`; the
    /// returned text is the same either way.
    pub async fn analyze(&self, text: &str, language: &str) -> Result<String, AnalysisError> {
        let prompt = build_prompt(text, language);

        let response = self.provider.generate(&prompt).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.provider.model(), "Inference engine failure");
            AnalysisError::from(e)
        })?;

        tracing::info!(
            model = %self.provider.model(),
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            finish_reason = ?response.finish_reason,
            "Inference completed"
        );
        if response.finish_reason == FinishReason::Length {
            tracing::warn!(
                output_tokens = response.output_tokens,
                "Upstream output hit the token limit and may be truncated"
            );
        }

        let cleaned = strip_code_fences(&response.text);

        if self.strict_output {
            LegalAnalysis::parse(&cleaned).map_err(|e| {
                tracing::error!(
                    error = %e,
                    output_len = cleaned.len(),
                    "Upstream output does not match the analysis schema"
                );
                AnalysisError::MalformedOutput(e)
            })?;
        }

        Ok(cleaned)
    }
}
