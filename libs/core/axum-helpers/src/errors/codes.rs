//! Type-safe error codes attached to error log lines.
//!
//! Clients only ever see the `{"error": ...}` body; the code is for whoever
//! reads the logs.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Request payload failed domain validation
    ValidationError,

    /// Path parameter is not a valid identifier
    InvalidId,

    /// Request body is not parseable JSON
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    /// Route exists but not for this HTTP method
    MethodNotAllowed,

    /// Request body has a non-JSON content type
    UnsupportedMediaType,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier, used as a log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
        }
    }

    /// Integer code for logging and monitoring.
    ///
    /// Every variant is a client error, so all codes sit in 1000-1999.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1005,
            Self::UnsupportedMediaType => 1006,
        }
    }

    /// Message used when the error carries no message of its own.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid identifier",
            Self::InvalidJson => "Malformed JSON body",
            Self::NotFound => "Not found",
            Self::MethodNotAllowed => "Method not allowed",
            Self::UnsupportedMediaType => "Content-Type must be application/json",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
