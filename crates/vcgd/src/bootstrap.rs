//! Startup-time target vehicle selection

use anyhow::{bail, Result};
use vcg_core::Vehicle;

/// Resolve the vehicle every control endpoint will operate on.
///
/// An explicitly configured id wins; otherwise the first vehicle of the
/// initial snapshot is selected. An empty account is a startup-fatal
/// condition - the daemon must not start serving without a target.
pub fn select_target_vehicle(configured: Option<&str>, snapshot: &[Vehicle]) -> Result<String> {
    if snapshot.is_empty() {
        bail!("No vehicles found in the account");
    }

    if let Some(id) = configured {
        if snapshot.iter().all(|v| v.id != id) {
            tracing::warn!(
                vehicle_id = %id,
                "Configured vehicle id not present in the initial snapshot"
            );
        }
        return Ok(id.to_string());
    }

    let first = &snapshot[0];
    tracing::info!(
        vehicle_id = %first.id,
        name = %first.name,
        "No vehicle id configured, using the first vehicle found"
    );
    Ok(first.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            name: format!("Vehicle {}", id),
            model: "EV6".to_string(),
            year: "2023".to_string(),
        }
    }

    #[test]
    fn unconfigured_selects_first_vehicle() {
        let snapshot = vec![vehicle("VH-1"), vehicle("VH-2")];
        assert_eq!(select_target_vehicle(None, &snapshot).unwrap(), "VH-1");
    }

    #[test]
    fn configured_id_wins() {
        let snapshot = vec![vehicle("VH-1"), vehicle("VH-2")];
        assert_eq!(
            select_target_vehicle(Some("VH-2"), &snapshot).unwrap(),
            "VH-2"
        );
    }

    #[test]
    fn empty_account_is_fatal() {
        assert!(select_target_vehicle(None, &[]).is_err());
        // Even an explicit id cannot rescue an empty account
        assert!(select_target_vehicle(Some("VH-1"), &[]).is_err());
    }
}
