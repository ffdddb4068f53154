//! SPA serving: assets, index fallback and the missing-frontend error.

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::{app_with_state, body_bytes, body_json, get_request, MISSING_ASSET_ROOT};
use gemini_gateway::services::ModelClientState;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX_HTML: &str = "<!doctype html><title>Gemini</title>";

fn dist_dir(with_index: bool) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.js"), "console.log('app');").unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();
    fs::write(dir.path().join("assets").join("logo.svg"), "<svg/>").unwrap();
    if with_index {
        fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    }
    dir
}

#[tokio::test]
async fn existing_asset_is_served() {
    let dist = dist_dir(true);
    let app = app_with_state(ModelClientState::Unavailable, dist.path());

    let response = app.oneshot(get_request("/main.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.contains("javascript"), "{}", content_type);
    assert_eq!(body_bytes(response).await, b"console.log('app');".to_vec());
}

#[tokio::test]
async fn nested_asset_is_served() {
    let dist = dist_dir(true);
    let app = app_with_state(ModelClientState::Unavailable, dist.path());

    let response = app.oneshot(get_request("/assets/logo.svg")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<svg/>".to_vec());
}

#[tokio::test]
async fn root_serves_index() {
    let dist = dist_dir(true);
    let app = app_with_state(ModelClientState::Unavailable, dist.path());

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, INDEX_HTML.as_bytes().to_vec());
}

#[tokio::test]
async fn unknown_client_route_falls_back_to_index() {
    let dist = dist_dir(true);

    for uri in ["/chat/123", "/settings", "/api/unknown"] {
        let app = app_with_state(ModelClientState::Unavailable, dist.path());
        let response = app.oneshot(get_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert_eq!(body_bytes(response).await, INDEX_HTML.as_bytes().to_vec());
    }
}

#[tokio::test]
async fn traversal_does_not_escape_the_root() {
    let dist = dist_dir(true);
    let app = app_with_state(ModelClientState::Unavailable, dist.path());

    let response = app
        .oneshot(get_request("/..%2F..%2Fetc%2Fpasswd"))
        .await
        .unwrap();

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(!body.contains("root:"));
}

#[tokio::test]
async fn missing_index_is_a_json_404() {
    let dist = dist_dir(false);
    let app = app_with_state(ModelClientState::Unavailable, dist.path());

    let response = app.oneshot(get_request("/somewhere")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Frontend not found"));
}

#[tokio::test]
async fn missing_asset_root_is_a_json_404_everywhere() {
    for uri in ["/", "/index.html", "/main.js", "/deep/link"] {
        let app = app_with_state(ModelClientState::Unavailable, Path::new(MISSING_ASSET_ROOT));
        let response = app.oneshot(get_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Frontend not found. Application may be misconfigured."
        );
    }
}

fn post_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap()
}

#[tokio::test]
async fn non_get_request_without_frontend_is_a_json_404() {
    for uri in ["/api/other", "/", "/deep/link"] {
        let app = app_with_state(ModelClientState::Unavailable, Path::new(MISSING_ASSET_ROOT));
        let response = app.oneshot(post_request(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Frontend not found. Application may be misconfigured."
        );
    }
}

#[tokio::test]
async fn non_get_request_with_frontend_is_a_json_405() {
    let dist = dist_dir(true);
    let app = app_with_state(ModelClientState::Unavailable, dist.path());

    let response = app.oneshot(post_request("/api/other")).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Method not allowed");
}
