//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - payload failed validation",
    content_type = "application/json",
    example = json!({ "error": "Name is required" })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - path id is not a non-negative integer",
    content_type = "application/json",
    example = json!({ "error": "Invalid id: abc" })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "error": "Item not found" })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unsupported Media Type - body is not JSON",
    content_type = "application/json",
    example = json!({ "error": "Content-Type must be application/json" })
)]
pub struct UnsupportedMediaTypeResponse(pub ErrorResponse);
