use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_TARGET_LANG: &str = "English";

fn default_target_lang() -> String {
    DEFAULT_TARGET_LANG.to_string()
}

#[derive(Debug, Deserialize, Validate)]
pub struct AnalysisRequest {
    /// Unstructured legal text.
    #[validate(length(min = 15, message = "raw_text must be at least 15 characters"))]
    pub raw_text: String,

    /// Language the summary is written in.
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: String,
    pub data: String,
}

impl AnalysisResponse {
    pub fn success(data: String) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}
