//! HTTP error mapping for amyarc-ar

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Name failed the path safety check (400)
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// I/O, parse, or schema failure while reading archive data (500)
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<amyarc_common::Error> for ApiError {
    fn from(err: amyarc_common::Error) -> Self {
        use amyarc_common::Error;
        match err {
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::InvalidName(msg) => ApiError::InvalidName(msg),
            Error::Retrieval(msg) => ApiError::Retrieval(msg),
            Error::Io(e) => ApiError::Internal(e.to_string()),
            Error::Config(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::InvalidName(msg) => (StatusCode::BAD_REQUEST, "INVALID_NAME", msg),
            ApiError::Retrieval(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "RETRIEVAL_ERROR",
                msg,
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                msg,
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
