//! Application state for the command gateway

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use vcg_core::{ClientResult, CommandResult, SessionClient, Vehicle, VehicleRegistry};

/// Application state shared across all handlers.
///
/// The registry lives inside a `Mutex` that is held across the whole
/// refresh-then-command sequence, so concurrent requests cannot interleave
/// a registry swap with another request's command. The original service had
/// no such guard; the serialization is a deliberate hardening.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    client: Arc<dyn SessionClient>,
    registry: Mutex<VehicleRegistry>,
    target_vehicle: String,
    shared_secret: String,
}

impl AppState {
    /// Create a new AppState over the given session client.
    ///
    /// `target_vehicle` is the vehicle every control endpoint operates on;
    /// `shared_secret` is compared against the `Authorization` header.
    pub fn new(
        client: Arc<dyn SessionClient>,
        target_vehicle: impl Into<String>,
        shared_secret: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                registry: Mutex::new(VehicleRegistry::new()),
                target_vehicle: target_vehicle.into(),
                shared_secret: shared_secret.into(),
            }),
        }
    }

    pub fn shared_secret(&self) -> &str {
        &self.inner.shared_secret
    }

    pub fn target_vehicle(&self) -> &str {
        &self.inner.target_vehicle
    }

    /// Refresh the registry from the session client and return the new
    /// snapshot. Full replacement, no merge; a failed refresh leaves the
    /// previous snapshot in place and propagates the client's error.
    pub async fn refresh(&self) -> ClientResult<Vec<Vehicle>> {
        let mut registry = self.inner.registry.lock().await;
        tracing::debug!("Refreshing vehicle states");
        let vehicles = self.inner.client.refresh_all().await?;
        registry.replace(vehicles);
        Ok(registry.list().to_vec())
    }

    /// Run one control command as a serialized refresh-then-act sequence.
    ///
    /// The registry lock is held from the start of the refresh until the
    /// command returns, so no other request can observe or mutate state
    /// mid-sequence. Each request performs its own independent refresh;
    /// there is no staleness threshold and no batching.
    pub async fn run_command<F, Fut>(&self, command: F) -> ClientResult<CommandResult>
    where
        F: FnOnce(Arc<dyn SessionClient>, String) -> Fut,
        Fut: Future<Output = ClientResult<CommandResult>>,
    {
        let mut registry = self.inner.registry.lock().await;
        tracing::debug!("Refreshing vehicle states");
        let vehicles = self.inner.client.refresh_all().await?;
        registry.replace(vehicles);

        let result = command(
            self.inner.client.clone(),
            self.inner.target_vehicle.clone(),
        )
        .await;

        if let Ok(ref ack) = result {
            tracing::info!(command_id = %ack.command_id, "Command acknowledged");
        }
        result
    }
}
