//! vcg-client - `SessionClient` implementation over the vendor cloud HTTP API
//!
//! Wraps the vendor's account/vehicle endpoints (login, vehicle list,
//! climate and door commands) behind the `SessionClient` trait from
//! `vcg-core`. Token acquisition and expiry-driven renewal are handled
//! internally; callers never see the raw token.

pub mod client;
pub mod types;

pub use client::{CloudSessionClient, Credentials};
