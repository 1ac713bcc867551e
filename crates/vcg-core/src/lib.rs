//! vcg-core - Core traits and types for the vehicle-cloud command gateway
//!
//! This crate provides the abstractions shared by the HTTP layer and the
//! vendor client:
//! - `SessionClient` - the trait every vehicle-cloud session implementation
//!   provides (authenticate, refresh, vehicle commands)
//! - `VehicleRegistry` - the in-memory snapshot of the account's vehicles
//! - `ClimateRequest` and friends - the command parameter models

pub mod client;
pub mod error;
pub mod models;
pub mod registry;

pub use client::{CommandResult, SessionClient};
pub use error::{ClientError, ClientResult};
pub use models::{ClimateRequest, SeatHeaterStatus, Vehicle};
pub use registry::VehicleRegistry;
