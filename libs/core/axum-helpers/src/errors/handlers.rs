use axum::response::{IntoResponse, Response};

use super::{AppError, ErrorCode};

/// Router fallback for paths no route matches.
pub async fn not_found() -> Response {
    AppError::NotFound(ErrorCode::NotFound.default_message().to_string()).into_response()
}

/// Fallback for a matched path hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed.into_response()
}
