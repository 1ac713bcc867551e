//! SessionClient trait - the core abstraction over the vendor cloud

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::models::{ClimateRequest, Vehicle};

/// Opaque acknowledgement returned by the vendor for a vehicle command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResult {
    /// Vendor-assigned identifier for the issued command
    pub command_id: String,
}

/// The trait every vehicle-cloud session implementation provides.
///
/// A session client owns the vendor authentication state (token, expiry)
/// and issues vehicle commands against the vendor API. The HTTP layer is
/// written against this trait so tests can substitute a mock.
///
/// Implementations must be safe to call from concurrent tasks; the gateway
/// additionally serializes refresh-then-command sequences on its side.
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// Establish or refresh the vendor session token.
    ///
    /// Fails with `ClientError::Authentication` on rejected credentials and
    /// `ClientError::Transport` when the vendor is unreachable.
    async fn authenticate(&self) -> ClientResult<()>;

    /// Re-fetch the full vehicle snapshot for the account.
    ///
    /// Order is whatever the vendor returns; callers must not assume it is
    /// stable across refreshes.
    async fn refresh_all(&self) -> ClientResult<Vec<Vehicle>>;

    /// Issue a start-climate command for the given vehicle
    async fn start_climate(
        &self,
        vehicle_id: &str,
        request: &ClimateRequest,
    ) -> ClientResult<CommandResult>;

    /// Issue a stop-climate command for the given vehicle
    async fn stop_climate(&self, vehicle_id: &str) -> ClientResult<CommandResult>;

    /// Lock the given vehicle's doors
    async fn lock(&self, vehicle_id: &str) -> ClientResult<CommandResult>;

    /// Unlock the given vehicle's doors
    async fn unlock(&self, vehicle_id: &str) -> ClientResult<CommandResult>;
}
