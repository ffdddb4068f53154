//! Serves the prebuilt single-page app.
//!
//! A request path that names a file under the asset root gets that file;
//! anything else gets `index.html` so the client-side router can take over.

use axum::{
    body::Body,
    extract::Request,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::{AppError, ErrorResponse};
use std::path::{Path, PathBuf};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

pub const INDEX_DOCUMENT: &str = "index.html";
pub const FRONTEND_NOT_FOUND_MESSAGE: &str =
    "Frontend not found. Application may be misconfigured.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

#[derive(Debug, Clone)]
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_DOCUMENT)
    }

    pub fn root_exists(&self) -> bool {
        self.root.is_dir()
    }

    async fn index_exists(&self) -> bool {
        tokio::fs::metadata(self.index_path())
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    /// Resolve `req` against the asset root, falling back to the index
    /// document, then to a JSON 404.
    pub async fn serve(&self, req: Request) -> Response {
        let method = req.method().clone();
        let headers = req.headers().clone();

        // ServeDir answers other methods with an empty 405 before touching
        // the filesystem.
        if method != Method::GET && method != Method::HEAD {
            if !self.index_exists().await {
                return self.frontend_missing();
            }
            return (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorResponse::new(METHOD_NOT_ALLOWED_MESSAGE)),
            )
                .into_response();
        }

        // ServeDir decodes the path and refuses to leave the root.
        let response = match ServeDir::new(&self.root).oneshot(req).await {
            Ok(response) => response,
            Err(never) => match never {},
        };
        if response.status() != StatusCode::NOT_FOUND {
            return response.map(Body::new);
        }

        if !self.index_exists().await {
            return self.frontend_missing();
        }

        let mut index_req = Request::new(Body::empty());
        *index_req.method_mut() = method;
        *index_req.headers_mut() = headers;

        match ServeFile::new(self.index_path()).oneshot(index_req).await {
            Ok(response) => response.map(Body::new),
            Err(never) => match never {},
        }
    }

    fn frontend_missing(&self) -> Response {
        tracing::error!(
            root = %self.root.display(),
            "index.html not found in static folder"
        );
        AppError::NotFound(FRONTEND_NOT_FOUND_MESSAGE.to_string()).into_response()
    }
}
