//! vcgd - Vehicle-cloud command gateway daemon
//!
//! Thin authenticated HTTP gateway over a single vehicle-cloud account:
//! list vehicles, start/stop climate, lock/unlock, all targeting one
//! default vehicle selected at startup.
//!
//! Configuration comes from the environment:
//!   VCG_USERNAME, VCG_PASSWORD, VCG_PIN  - account credentials (required)
//!   VCG_SECRET                           - shared secret for the API (required)
//!   VCG_VEHICLE_ID                       - target vehicle (default: first on account)
//!   VCG_BASE_URL                         - vendor API base URL
//!   VCG_PORT                             - listen port (default: 8080)

mod bootstrap;
mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vcg_api::{create_router, AppState};
use vcg_client::{CloudSessionClient, Credentials};
use vcg_core::SessionClient;

use crate::bootstrap::select_target_vehicle;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vcgd=info,vcg_api=info,vcg_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting vcgd (vehicle-cloud command gateway)");

    let config = Config::from_env()?;

    let credentials = Credentials {
        username: config.username.clone(),
        password: config.password.clone(),
        pin: config.pin.clone(),
    };
    let client: Arc<dyn SessionClient> =
        Arc::new(CloudSessionClient::new(&config.base_url, credentials)?);

    // Initial authentication and vehicle snapshot; any failure here is
    // fatal and the listener is never bound
    tracing::info!("Authenticating with the vendor cloud");
    client.authenticate().await?;

    tracing::info!("Fetching initial vehicle snapshot");
    let snapshot = client.refresh_all().await?;
    tracing::info!(count = snapshot.len(), "Connected to account");

    let target_vehicle = select_target_vehicle(config.vehicle_id.as_deref(), &snapshot)?;
    tracing::info!(vehicle_id = %target_vehicle, "Target vehicle selected");

    let state = AppState::new(client, target_vehicle, config.shared_secret.clone());
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
