use crate::error::ApiError;
use crate::models::{AskRequest, AskResponse};
use crate::services::metrics::{record_ask_outcome, record_upstream_latency, OUTCOME_ANSWERED};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use std::time::Instant;

/// Characters of question/answer text written to the logs.
const LOG_SNIPPET_CHARS: usize = 80;

/// `POST /api/ask`
///
/// Checks run in a fixed order: model availability, JSON body, question
/// presence. Only then is the upstream called.
pub async fn ask(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AskResponse>, ApiError> {
    let result = answer(&state, &headers, &body).await;

    record_ask_outcome(match &result {
        Ok(_) => OUTCOME_ANSWERED,
        Err(e) => e.kind().as_str(),
    });

    result.map(Json)
}

async fn answer(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<AskResponse, ApiError> {
    let client = state.model.client().ok_or(ApiError::Unconfigured)?;

    if !is_json_content_type(headers) {
        return Err(ApiError::BadRequestFormat(
            "content type is not application/json".to_string(),
        ));
    }

    let request =
        AskRequest::from_slice(body).map_err(|e| ApiError::BadRequestFormat(e.to_string()))?;
    let question = request.question().ok_or(ApiError::MissingField)?;

    tracing::info!(
        model = client.model(),
        question = %snippet(question),
        "Received question for Gemini"
    );

    let started = Instant::now();
    let result = client.ask(question).await;
    record_upstream_latency(client.model(), started.elapsed());
    let generated = result?;

    tracing::info!(answer = %snippet(&generated.text), "Gemini response received");

    Ok(AskResponse {
        answer: generated.text,
    })
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn snippet(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(LOG_SNIPPET_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
