//! Error-to-response mapping for the task API.

use crate::todo::services::TodoTaskServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced by the task API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The status path parameter does not name an enumeration member.
    #[error("invalid status value: {0}")]
    InvalidStatusParam(String),
    /// The service rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] TodoTaskServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidStatusParam(_) => {
                (StatusCode::BAD_REQUEST, "Invalid status value").into_response()
            }
            Self::Service(TodoTaskServiceError::InvalidStatus(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            Self::Service(TodoTaskServiceError::Repository(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
