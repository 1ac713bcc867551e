//! Wire types for the vendor cloud API

use serde::{Deserialize, Serialize};

/// Body of `POST /v2/login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub pin: &'a str,
}

/// Response of `POST /v2/login`
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
}

/// Response of `GET /v2/vehicles`
#[derive(Debug, Deserialize)]
pub struct VehicleListResponse {
    pub vehicles: Vec<VehicleEntry>,
}

/// One vehicle as the vendor reports it
#[derive(Debug, Deserialize)]
pub struct VehicleEntry {
    pub vehicle_id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: String,
}

/// Response of the command endpoints (climate/door)
#[derive(Debug, Deserialize)]
pub struct CommandResponse {
    pub command_id: String,
}

/// Error body the vendor attaches to non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct VendorErrorResponse {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}
