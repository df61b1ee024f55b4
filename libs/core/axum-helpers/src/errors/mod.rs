pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response.
///
/// ```json
/// { "error": "Item not found" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own error enums into this one so every
/// failure leaves the service with the same body shape and a log line
/// tagged with an [`ErrorCode`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("JSON parsing error: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::InvalidId(_) | AppError::InvalidJson(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Bad request: {}",
                    msg
                );
                (ErrorCode::ValidationError, msg)
            }
            AppError::InvalidId(raw) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidId.code(),
                    "Invalid id path segment: {:?}",
                    raw
                );
                (ErrorCode::InvalidId, format!("Invalid id: {}", raw))
            }
            AppError::InvalidJson(e) => {
                tracing::warn!(
                    error_code = ErrorCode::InvalidJson.code(),
                    "JSON parsing error: {:?}",
                    e
                );
                (
                    ErrorCode::InvalidJson,
                    ErrorCode::InvalidJson.default_message().to_string(),
                )
            }
            AppError::UnsupportedMediaType(content_type) => {
                tracing::warn!(
                    error_code = ErrorCode::UnsupportedMediaType.code(),
                    "Unsupported content type: {}",
                    content_type
                );
                (
                    ErrorCode::UnsupportedMediaType,
                    ErrorCode::UnsupportedMediaType.default_message().to_string(),
                )
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (ErrorCode::NotFound, msg)
            }
            AppError::MethodNotAllowed => {
                tracing::info!(
                    error_code = ErrorCode::MethodNotAllowed.code(),
                    "Method not allowed"
                );
                (
                    ErrorCode::MethodNotAllowed,
                    ErrorCode::MethodNotAllowed.default_message().to_string(),
                )
            }
        };

        tracing::debug!(error = %code, status = status.as_u16(), "Rendering error response");
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let (status, body) = render(AppError::NotFound("Item not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, ErrorResponse::new("Item not found"));
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let (status, body) = render(AppError::BadRequest("Name is required".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Name is required");
    }

    #[tokio::test]
    async fn test_invalid_id_names_the_segment() {
        let (status, body) = render(AppError::InvalidId("abc".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid id: abc");
    }

    #[tokio::test]
    async fn test_invalid_json_hides_parser_detail() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let (status, body) = render(AppError::from(parse_err)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Malformed JSON body");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::UnsupportedMediaType("text/plain".into()).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            AppError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
