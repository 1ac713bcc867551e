//! HTTP request handlers

pub mod climate;
pub mod doors;
pub mod vehicles;

use axum::Json;
use serde::Serialize;

/// Acknowledgement body for a completed vehicle command
#[derive(Serialize)]
pub struct CommandAck {
    pub status: &'static str,
    /// Vendor command identifier
    pub result: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// GET /
/// Unauthenticated liveness/welcome endpoint
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Welcome to the Vehicle Command Gateway",
    })
}
