//! Common error types for vehicle-cloud session clients

use thiserror::Error;

/// Result type for session client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in a vehicle-cloud session client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Credentials rejected by the vendor (bad username/password/pin,
    /// or an expired session the vendor refused to renew)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Transport/communication error reaching the vendor cloud
    #[error("Transport error: {0}")]
    Transport(String),

    /// Vendor API returned an error response
    #[error("Vendor error ({code}): {message}")]
    Vendor {
        /// HTTP status code returned by the vendor
        code: u16,
        /// Vendor-supplied error text
        message: String,
    },

    /// Vendor response did not match the expected shape
    #[error("Invalid vendor response: {0}")]
    InvalidResponse(String),
}
