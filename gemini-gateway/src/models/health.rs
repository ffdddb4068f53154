use serde::Serialize;

pub const HEALTHY: &str = "healthy";
pub const MODEL_UNAVAILABLE_MESSAGE: &str = "AI service not available";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub gemini_model_initialized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl HealthResponse {
    /// The process is alive either way; only model availability varies.
    pub fn for_model(initialized: bool) -> Self {
        Self {
            status: HEALTHY,
            gemini_model_initialized: initialized,
            message: (!initialized).then_some(MODEL_UNAVAILABLE_MESSAGE),
        }
    }
}
