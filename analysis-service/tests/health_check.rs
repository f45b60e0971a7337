//! Health, readiness, CORS and a full-socket smoke test.

mod common;

use analysis_service::config::CorsSettings;
use analysis_service::services::providers::mock::MockTextProvider;
use analysis_service::startup::Application;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{json_body, test_config, TestApp, VALID_ANALYSIS, VALID_DOCUMENT};
use reqwest::Client;
use service_core::middleware::REQUEST_ID_HEADER;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = TestApp::new(MockTextProvider::unconfigured());

    let (status, body) = json_body(app.get("/health").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "analysis-service");
}

#[tokio::test]
async fn readiness_reports_configured_provider() {
    let app = TestApp::new(MockTextProvider::replying(VALID_ANALYSIS));

    let (status, body) = json_body(app.get("/ready").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "mock-model");
}

#[tokio::test]
async fn readiness_fails_without_credentials() {
    let app = TestApp::new(MockTextProvider::unconfigured());

    let response = app.get("/ready").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(app.provider.call_count(), 0);
}

#[tokio::test]
async fn cors_preflight_allows_any_origin_by_default() {
    let app = TestApp::new(MockTextProvider::replying(VALID_ANALYSIS));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/v1/analyze")
                .header(header::ORIGIN, "http://localhost:5500")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn cors_allow_list_only_echoes_listed_origins() {
    let mut config = test_config(false);
    config.cors = CorsSettings::from_list("https://app.example");
    let app = TestApp::with_config(MockTextProvider::replying(VALID_ANALYSIS), config);

    let request = |origin: &'static str| {
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app
        .router
        .clone()
        .oneshot(request("https://app.example"))
        .await
        .unwrap();
    assert_eq!(
        allowed
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://app.example"
    );

    let denied = app
        .router
        .clone()
        .oneshot(request("https://evil.example"))
        .await
        .unwrap();
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn served_application_answers_over_http() {
    let provider = Arc::new(MockTextProvider::replying(VALID_ANALYSIS));
    let app = Application::build_with_provider(test_config(false), provider.clone())
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    let client = Client::new();
    let base = format!("http://127.0.0.1:{}", port);
    for _ in 0..50 {
        if client.get(format!("{}/health", base)).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let response = client
        .post(format!("{}/api/v1/analyze", base))
        .json(&serde_json::json!({ "raw_text": VALID_DOCUMENT }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"], VALID_ANALYSIS);
    assert_eq!(provider.call_count(), 1);
}
