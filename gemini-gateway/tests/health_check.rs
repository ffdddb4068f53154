mod common;

use axum::http::StatusCode;
use common::{app_with_provider, body_json, get_request, unavailable_app};
use gemini_gateway::services::providers::mock::MockTextProvider;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_initialized_model() {
    let app = app_with_provider(Arc::new(MockTextProvider::answering("ok")));

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "healthy", "gemini_model_initialized": true})
    );
}

#[tokio::test]
async fn health_stays_ok_without_model() {
    let response = unavailable_app().oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "status": "healthy",
            "gemini_model_initialized": false,
            "message": "AI service not available"
        })
    );
}

#[tokio::test]
async fn metrics_endpoint_answers_without_recorder() {
    let response = unavailable_app().oneshot(get_request("/metrics")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
