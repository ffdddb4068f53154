//! Client-facing error taxonomy for the ask endpoint.
//!
//! Every failure the endpoint can produce ends up as one [`ApiError`], which
//! knows its [`ErrorKind`], HTTP status and the message clients may see.
//! Upstream detail stays in the logs.

use crate::services::model_client::UpstreamFailure;
use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::ErrorResponse;
use thiserror::Error;

pub const UNCONFIGURED_MESSAGE: &str =
    "AI service is not configured or temporarily unavailable. Please contact support.";
pub const NOT_JSON_MESSAGE: &str = "Request must be JSON";
pub const MISSING_QUESTION_MESSAGE: &str = "Missing 'question' field in JSON payload";
pub const BLOCKED_PREFIX: &str = "Your request was blocked: ";
pub const INVALID_CONFIG_MESSAGE: &str =
    "There was an issue with the AI service configuration (e.g., API key).";
pub const PERMISSION_DENIED_MESSAGE: &str =
    "API key lacks permission for the requested operation.";
pub const QUOTA_EXCEEDED_MESSAGE: &str = "AI service quota exceeded. Please try again later.";
pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str =
    "An unexpected error occurred with the AI service.";
pub const RESPONSE_SHAPE_MESSAGE: &str = "Failed to process the response from the AI service.";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected server error occurred.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unconfigured,
    BadRequestFormat,
    MissingField,
    ContentBlocked,
    InvalidUpstreamConfig,
    PermissionDenied,
    QuotaExceeded,
    UpstreamUnavailable,
    ResponseShapeError,
    Unexpected,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::Unconfigured => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::BadRequestFormat => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorKind::MissingField => StatusCode::BAD_REQUEST,
            ErrorKind::ContentBlocked => StatusCode::BAD_REQUEST,
            ErrorKind::InvalidUpstreamConfig => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
            ErrorKind::QuotaExceeded => StatusCode::TOO_MANY_REQUESTS,
            ErrorKind::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::ResponseShapeError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message for kinds whose wording never depends on the upstream.
    pub fn fixed_message(self) -> Option<&'static str> {
        match self {
            ErrorKind::Unconfigured => Some(UNCONFIGURED_MESSAGE),
            ErrorKind::BadRequestFormat => Some(NOT_JSON_MESSAGE),
            ErrorKind::MissingField => Some(MISSING_QUESTION_MESSAGE),
            ErrorKind::ContentBlocked => None,
            ErrorKind::InvalidUpstreamConfig => Some(INVALID_CONFIG_MESSAGE),
            ErrorKind::PermissionDenied => Some(PERMISSION_DENIED_MESSAGE),
            ErrorKind::QuotaExceeded => Some(QUOTA_EXCEEDED_MESSAGE),
            ErrorKind::UpstreamUnavailable => Some(UPSTREAM_UNAVAILABLE_MESSAGE),
            ErrorKind::ResponseShapeError => Some(RESPONSE_SHAPE_MESSAGE),
            ErrorKind::Unexpected => Some(UNEXPECTED_MESSAGE),
        }
    }

    /// Stable label for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Unconfigured => "unconfigured",
            ErrorKind::BadRequestFormat => "bad_request_format",
            ErrorKind::MissingField => "missing_field",
            ErrorKind::ContentBlocked => "content_blocked",
            ErrorKind::InvalidUpstreamConfig => "invalid_upstream_config",
            ErrorKind::PermissionDenied => "permission_denied",
            ErrorKind::QuotaExceeded => "quota_exceeded",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::ResponseShapeError => "response_shape_error",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Model client is not initialized")]
    Unconfigured,

    #[error("Request body is not JSON: {0}")]
    BadRequestFormat(String),

    #[error("Request has no question")]
    MissingField,

    #[error("Upstream failure: {0}")]
    Upstream(#[from] UpstreamFailure),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unconfigured => ErrorKind::Unconfigured,
            ApiError::BadRequestFormat(_) => ErrorKind::BadRequestFormat,
            ApiError::MissingField => ErrorKind::MissingField,
            ApiError::Upstream(failure) => classify(failure),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    /// The message clients see. Only a safety block echoes upstream text.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Upstream(UpstreamFailure::ContentBlocked(message)) => {
                format!("{}{}", BLOCKED_PREFIX, message)
            }
            _ => self
                .kind()
                .fixed_message()
                .unwrap_or(UNEXPECTED_MESSAGE)
                .to_string(),
        }
    }
}

/// Map an adapter failure onto exactly one kind.
pub fn classify(failure: &UpstreamFailure) -> ErrorKind {
    match failure {
        UpstreamFailure::ContentBlocked(_) => ErrorKind::ContentBlocked,
        UpstreamFailure::MissingText => ErrorKind::ResponseShapeError,
        UpstreamFailure::Provider(error) => match error {
            ProviderError::InvalidArgument(_) => ErrorKind::InvalidUpstreamConfig,
            ProviderError::PermissionDenied(_) => ErrorKind::PermissionDenied,
            ProviderError::ResourceExhausted(_) => ErrorKind::QuotaExceeded,
            ProviderError::ApiError(_) | ProviderError::NetworkError(_) => {
                ErrorKind::UpstreamUnavailable
            }
            ProviderError::InvalidResponse(_) => ErrorKind::ResponseShapeError,
            ProviderError::Client(_) => ErrorKind::Unexpected,
        },
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        match kind {
            ErrorKind::BadRequestFormat | ErrorKind::MissingField | ErrorKind::ContentBlocked => {
                tracing::warn!(kind = kind.as_str(), error = %self, "Rejected ask request")
            }
            _ => tracing::error!(kind = kind.as_str(), error = %self, "Ask request failed"),
        }

        (
            kind.status_code(),
            Json(ErrorResponse::new(self.client_message())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(error: ProviderError) -> ApiError {
        ApiError::Upstream(UpstreamFailure::Provider(error))
    }

    #[test]
    fn local_errors_have_fixed_statuses() {
        assert_eq!(ApiError::Unconfigured.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            ApiError::BadRequestFormat("eof".into()).status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(ApiError::MissingField.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::BadRequestFormat("eof".into()).client_message(),
            "Request must be JSON"
        );
        assert_eq!(
            ApiError::MissingField.client_message(),
            "Missing 'question' field in JSON payload"
        );
    }

    #[test]
    fn provider_categories_map_one_to_one() {
        let cases = [
            (
                ProviderError::InvalidArgument("bad key".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                INVALID_CONFIG_MESSAGE,
            ),
            (
                ProviderError::PermissionDenied("no".into()),
                StatusCode::FORBIDDEN,
                PERMISSION_DENIED_MESSAGE,
            ),
            (
                ProviderError::ResourceExhausted("quota".into()),
                StatusCode::TOO_MANY_REQUESTS,
                QUOTA_EXCEEDED_MESSAGE,
            ),
            (
                ProviderError::ApiError("500".into()),
                StatusCode::SERVICE_UNAVAILABLE,
                UPSTREAM_UNAVAILABLE_MESSAGE,
            ),
            (
                ProviderError::NetworkError("reset".into()),
                StatusCode::SERVICE_UNAVAILABLE,
                UPSTREAM_UNAVAILABLE_MESSAGE,
            ),
            (
                ProviderError::InvalidResponse("not json".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                RESPONSE_SHAPE_MESSAGE,
            ),
            (
                ProviderError::Client("bad header".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                UNEXPECTED_MESSAGE,
            ),
        ];

        for (error, status, message) in cases {
            let api_error = upstream(error);
            assert_eq!(api_error.status_code(), status, "{:?}", api_error);
            assert_eq!(api_error.client_message(), message);
        }
    }

    #[test]
    fn block_echoes_filter_message() {
        let error = ApiError::from(UpstreamFailure::ContentBlocked(
            "Blocked due to safety concerns.".into(),
        ));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error.client_message(),
            "Your request was blocked: Blocked due to safety concerns."
        );
    }

    #[test]
    fn missing_text_is_a_shape_error() {
        let error = ApiError::from(UpstreamFailure::MissingText);
        assert_eq!(error.kind(), ErrorKind::ResponseShapeError);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_detail_is_not_echoed() {
        let error = upstream(ProviderError::PermissionDenied(
            "project 1234 has no access".into(),
        ));
        assert!(!error.client_message().contains("1234"));
    }
}
