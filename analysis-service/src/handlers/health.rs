use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "analysis-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe. Ready once upstream credentials are present; upstream is not contacted.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.analyzer.is_ready() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "model": state.analyzer.model()
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unavailable",
                "error": "Upstream AI provider is not configured"
            })),
        )
    }
}
