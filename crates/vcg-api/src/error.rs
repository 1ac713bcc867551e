//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use vcg_core::ClientError;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 403 Forbidden - shared secret missing or mismatched
    Unauthorized,
    /// 404 Not Found
    NotFound(String),
    /// 500 Internal Server Error - any session client failure
    Upstream(String),
}

/// Error response body: a single `error` field with the failure text
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => (StatusCode::FORBIDDEN, "Unauthorized".to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!(%message, "Upstream failure");
        } else {
            tracing::debug!(%message, status = status.as_u16(), "API client error");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        // Every session client failure surfaces as a 500 with the error's
        // textual description; no retry, no partial success reporting.
        ApiError::Upstream(err.to_string())
    }
}
