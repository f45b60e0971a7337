#![allow(dead_code)]

use analysis_service::config::{
    AnalysisConfig, AnalysisSettings, CorsSettings, GeminiSettings,
};
use analysis_service::services::providers::mock::MockTextProvider;
use analysis_service::startup::{build_router, AppState};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const VALID_DOCUMENT: &str = "This agreement is governed by the laws of X.";
pub const VALID_ANALYSIS: &str = r#"{"summary":"Governing law clause","risk_level":"Low","key_entities":["X"],"action_item":"None"}"#;

pub fn test_config(strict_output: bool) -> AnalysisConfig {
    AnalysisConfig {
        common: CoreConfig { port: 0 },
        gemini: GeminiSettings::default(),
        analysis: AnalysisSettings { strict_output },
        cors: CorsSettings::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub provider: Arc<MockTextProvider>,
}

impl TestApp {
    pub fn new(provider: MockTextProvider) -> Self {
        Self::with_config(provider, test_config(false))
    }

    pub fn strict(provider: MockTextProvider) -> Self {
        Self::with_config(provider, test_config(true))
    }

    pub fn with_config(provider: MockTextProvider, config: AnalysisConfig) -> Self {
        let provider = Arc::new(provider);
        let router = build_router(AppState::new(config, provider.clone()));
        Self { router, provider }
    }

    pub async fn post_analyze(&self, body: serde_json::Value) -> Response {
        self.post_raw(body.to_string()).await
    }

    pub async fn post_raw(&self, body: String) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/analyze")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

pub async fn json_body(response: Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}
