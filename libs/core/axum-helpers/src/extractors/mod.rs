//! Custom extractors for Axum handlers.
//!
//! Both reject with an [`AppError`](crate::errors::AppError) response, so a
//! malformed request never reaches handler logic.

pub mod id_path;
pub mod json_payload;

pub use id_path::IdPath;
pub use json_payload::JsonPayload;
