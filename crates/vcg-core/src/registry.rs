//! In-memory snapshot of the account's vehicles

use crate::models::Vehicle;

/// Holds the most recently fetched vehicle snapshot.
///
/// There is no TTL and no incremental update: every refresh replaces the
/// whole snapshot, and the last full refresh wins. Lookup order matches
/// whatever the session client returned.
#[derive(Debug, Default)]
pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire snapshot. No partial merge.
    pub fn replace(&mut self, vehicles: Vec<Vehicle>) {
        tracing::debug!(count = vehicles.len(), "Vehicle snapshot replaced");
        self.vehicles = vehicles;
    }

    /// The current snapshot, in the order the session client returned it
    pub fn list(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Look up a vehicle by its vendor-assigned identifier
    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str, name: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            name: name.to_string(),
            model: "EV6".to_string(),
            year: "2023".to_string(),
        }
    }

    #[test]
    fn replace_swaps_whole_snapshot() {
        let mut registry = VehicleRegistry::new();
        registry.replace(vec![vehicle("a", "Car A"), vehicle("b", "Car B")]);
        assert_eq!(registry.len(), 2);

        registry.replace(vec![vehicle("c", "Car C")]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("a").is_none());
        assert!(registry.get("c").is_some());
    }

    #[test]
    fn get_finds_by_id() {
        let mut registry = VehicleRegistry::new();
        registry.replace(vec![vehicle("a", "Car A"), vehicle("b", "Car B")]);

        assert_eq!(registry.get("b").unwrap().name, "Car B");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn list_preserves_client_order() {
        let mut registry = VehicleRegistry::new();
        registry.replace(vec![vehicle("b", "Car B"), vehicle("a", "Car A")]);

        let ids: Vec<&str> = registry.list().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn empty_registry_reports_empty() {
        let registry = VehicleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.list().len(), 0);
    }
}
