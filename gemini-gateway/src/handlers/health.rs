use crate::models::HealthResponse;
use crate::AppState;
use axum::{extract::State, Json};

/// `GET /health`. Always 200: a missing model is reported in the body, not
/// as a failed probe.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::for_model(state.model.is_initialized()))
}
