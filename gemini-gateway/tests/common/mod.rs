#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use gemini_gateway::config::CorsSettings;
use gemini_gateway::services::providers::mock::MockTextProvider;
use gemini_gateway::services::{ModelClientState, StaticAssets};
use gemini_gateway::startup::build_router;
use gemini_gateway::AppState;
use http_body_util::BodyExt;
use std::path::Path;
use std::sync::Arc;

/// Asset root that does not exist anywhere.
pub const MISSING_ASSET_ROOT: &str = "/nonexistent/gemini-gateway/assets";

pub fn app_with_state(model: ModelClientState, asset_root: &Path) -> Router {
    build_router(
        AppState::new(model, StaticAssets::new(asset_root)),
        &CorsSettings::default(),
    )
}

/// Router whose model replays `provider` on every ask.
pub fn app_with_provider(provider: Arc<MockTextProvider>) -> Router {
    app_with_state(
        ModelClientState::with_provider(provider),
        Path::new(MISSING_ASSET_ROOT),
    )
}

pub fn unavailable_app() -> Router {
    app_with_state(ModelClientState::Unavailable, Path::new(MISSING_ASSET_ROOT))
}

pub fn ask_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/ask")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("body is not JSON")
}
