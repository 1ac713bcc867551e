//! vcg-api - HTTP command gateway over a vehicle-cloud session client
//!
//! This crate provides the HTTP layer that exposes vehicle commands through
//! the `SessionClient` trait. It is client-agnostic: the daemon wires in the
//! real vendor client, tests substitute a mock.
//!
//! # Usage
//!
//! ```ignore
//! use vcg_api::{create_router, AppState};
//!
//! let state = AppState::new(client, target_vehicle_id, shared_secret);
//! let router = create_router(state);
//! ```

pub mod auth;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the gateway router with the given application state.
///
/// Every route except `/` sits behind the shared-secret check, so a
/// rejected request never reaches the session client.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/list_vehicles", get(handlers::vehicles::list_vehicles))
        .route("/start_climate", post(handlers::climate::start_climate))
        .route("/stop_climate", post(handlers::climate::stop_climate))
        .route("/unlock_car", post(handlers::doors::unlock_car))
        .route("/lock_car", post(handlers::doors::lock_car))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_shared_secret,
        ));

    Router::new()
        .route("/", get(handlers::root))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
