use serde::de::Error as _;
use serde::{Deserialize, Serialize};

/// Structured extraction the prompt asks the model to return.
///
/// Extra keys are ignored so that chatty models still pass as long as the
/// four required fields are present and well typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalAnalysis {
    pub summary: String,
    pub risk_level: String,
    pub key_entities: Vec<String>,
    pub action_item: String,
}

impl LegalAnalysis {
    /// Parse model output. Only a JSON object with named keys is accepted.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a JSON object"));
        }
        serde_json::from_value(value)
    }
}
