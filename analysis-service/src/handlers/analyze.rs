use crate::dtos::{AnalysisRequest, AnalysisResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::utils::ValidatedJson;

pub async fn analyze_document(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    tracing::info!(
        length = payload.raw_text.chars().count(),
        target_lang = %payload.target_lang,
        "Processing new document"
    );

    let data = state
        .analyzer
        .analyze(&payload.raw_text, &payload.target_lang)
        .await?;

    Ok(Json(AnalysisResponse::success(data)))
}
