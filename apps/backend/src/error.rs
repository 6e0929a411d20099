//! Error handling for the quiz API

use accent_core::SessionError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Session(SessionError::UnknownOption { .. }) => {
                (StatusCode::BAD_REQUEST, "unknown_option")
            }
            ApiError::Session(SessionError::Finished) => (StatusCode::CONFLICT, "quiz_finished"),
            ApiError::Session(SessionError::AlreadyAnswered { .. }) => {
                (StatusCode::CONFLICT, "already_answered")
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
