//! API error response types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::BatchSortError;

/// Errors surfaced by the HTTP layer
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body could not be decoded
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No strategy behind the requested entry point
    #[error("Not found: {0}")]
    NotFound(String),

    /// Sorting or response encoding failed
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<BatchSortError> for ApiError {
    fn from(err: BatchSortError) -> Self {
        match err {
            BatchSortError::UnknownStrategy(_) => ApiError::NotFound(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// API error response body
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,

    /// Machine-readable error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}
