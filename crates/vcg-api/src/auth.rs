//! Shared-secret authentication middleware
//!
//! The request's `Authorization` header value is compared byte-for-byte
//! against the configured shared secret - a static token, not a
//! cryptographic scheme (no Bearer prefix, no hashing, no expiry). A
//! mismatch or missing header yields 403 before any downstream call.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::state::AppState;

/// Axum middleware that enforces the shared-secret check on every route
/// it is layered over.
pub async fn require_shared_secret(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(value) if value == state.shared_secret() => next.run(request).await,
        _ => {
            tracing::warn!(
                path = %request.uri().path(),
                "Unauthorized request: missing or incorrect Authorization header"
            );
            ApiError::Unauthorized.into_response()
        }
    }
}
