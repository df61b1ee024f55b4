//! Raw JSON body extractor that distinguishes "no body" from "bad body".

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// Request body parsed as untyped JSON.
///
/// - empty (or whitespace-only) body → `JsonPayload(None)`
/// - body that is not valid JSON → 400 `{"error": "Malformed JSON body"}`
/// - explicit non-JSON `Content-Type` → 415
///
/// A missing `Content-Type` header is accepted. Field-level validation is
/// left to the handler, which is why this does not deserialize into a
/// typed struct the way `axum::Json` does.
pub struct JsonPayload(pub Option<Value>);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(content_type) = req.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default();
            if !is_json_content_type(content_type) {
                return Err(
                    AppError::UnsupportedMediaType(content_type.to_string()).into_response()
                );
            }
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| e.into_response())?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonPayload(None));
        }

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::InvalidJson(e).into_response())?;

        Ok(JsonPayload(Some(value)))
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
