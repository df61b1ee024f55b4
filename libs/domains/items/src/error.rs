use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Message returned for every lookup miss, whatever the id.
pub const ITEM_NOT_FOUND: &str = "Item not found";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(u64),

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(_) => AppError::NotFound(ITEM_NOT_FOUND.to_string()),
            ItemError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
