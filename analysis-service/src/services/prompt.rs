//! Prompt template and response cleanup.

/// Build the extraction instruction for `text`, asking for a summary in `language`.
pub fn build_prompt(text: &str, language: &str) -> String {
    format!(
        "Act as a Legal Tech Assistant. Extract data from the document below.\n\
         Return ONLY a raw JSON object with these keys: summary (in {language}), \
         risk_level, key_entities (list), action_item.\n\n\
         Document:\n{text}"
    )
}

/// Remove markdown code fences the model wraps around its JSON, then trim.
///
/// Every occurrence is removed, not only leading and trailing ones.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}
