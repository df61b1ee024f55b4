//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a non-negative integer `{id}` path parameter.
///
/// Only plain ASCII digits are accepted; signs, whitespace and values that
/// overflow `u64` are rejected with 400.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item ID: {}", id)
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
pub struct IdPath(pub u64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extracted = Path::<String>::from_request_parts(parts, state).await;
        let raw = match extracted {
            Ok(Path(raw)) => raw,
            Err(rejection) => {
                tracing::debug!("Path rejected: {}", rejection.body_text());
                let segment = last_segment(parts.uri.path()).to_string();
                return Err(AppError::InvalidId(segment).into_response());
            }
        };

        parse_id(&raw)
            .map(IdPath)
            .ok_or_else(|| AppError::InvalidId(raw).into_response())
    }
}

/// Still percent-encoded, so undecodable bytes can be echoed back
fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn fetch(uri: &str) -> (StatusCode, String) {
        let app = Router::new().route(
            "/items/{id}",
            get(|IdPath(id): IdPath| async move { id.to_string() }),
        );
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_extracts_integer_id() {
        assert_eq!(fetch("/items/42").await, (StatusCode::OK, "42".to_string()));
    }

    #[tokio::test]
    async fn test_undecodable_segment_is_json_error() {
        let (status, body) = fetch("/items/%FF").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body, serde_json::json!({"error": "Invalid id: %FF"}));
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/items/%FF"), "%FF");
        assert_eq!(last_segment("/items/7"), "7");
    }

    #[test]
    fn test_parse_id_accepts_digits() {
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("007"), Some(7));
    }

    #[test]
    fn test_parse_id_rejects_non_integers() {
        for raw in ["", "abc", "-1", "+1", "1.5", " 1", "18446744073709551616"] {
            assert_eq!(parse_id(raw), None, "{raw:?} should be rejected");
        }
    }
}
