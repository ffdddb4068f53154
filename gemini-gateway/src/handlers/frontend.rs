use crate::AppState;
use axum::{extract::Request, extract::State, response::Response};

/// Fallback for every path no other route claims.
pub async fn serve_frontend(State(state): State<AppState>, req: Request) -> Response {
    state.assets.serve(req).await
}
