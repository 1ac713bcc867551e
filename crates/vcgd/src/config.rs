//! Environment-provided configuration
//!
//! Read once at startup; missing credentials or a missing shared secret
//! abort the process before the listener is bound.

use anyhow::{anyhow, Result};

/// Vendor API base URL used when `VCG_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://owner-api.vehiclecloud.com";
/// Listen port used when `VCG_PORT` is not set
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub pin: String,
    /// Static token compared against the `Authorization` header
    pub shared_secret: String,
    /// Explicit target vehicle; `None` selects the account's first vehicle
    pub vehicle_id: Option<String>,
    pub base_url: String,
    pub port: u16,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            get(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow!("Missing {} environment variable", key))
        };

        let port = match get("VCG_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow!("Invalid VCG_PORT value: {}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            username: required("VCG_USERNAME")?,
            password: required("VCG_PASSWORD")?,
            pin: required("VCG_PIN")?,
            shared_secret: required("VCG_SECRET")?,
            vehicle_id: get("VCG_VEHICLE_ID").filter(|v| !v.is_empty()),
            base_url: get("VCG_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env(&[
            ("VCG_USERNAME", "driver@example.com"),
            ("VCG_PASSWORD", "hunter2"),
            ("VCG_PIN", "1234"),
            ("VCG_SECRET", "secret"),
        ])
    }

    #[test]
    fn loads_with_defaults() {
        let vars = full_env();
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.username, "driver@example.com");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.vehicle_id.is_none());
    }

    #[test]
    fn missing_credentials_are_fatal() {
        for key in ["VCG_USERNAME", "VCG_PASSWORD", "VCG_PIN", "VCG_SECRET"] {
            let mut vars = full_env();
            vars.remove(key);

            let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
            assert!(err.to_string().contains(key), "error should name {}", key);
        }
    }

    #[test]
    fn empty_secret_is_treated_as_missing() {
        let mut vars = full_env();
        vars.insert("VCG_SECRET".to_string(), String::new());

        assert!(Config::from_lookup(|k| vars.get(k).cloned()).is_err());
    }

    #[test]
    fn optional_overrides_are_honored() {
        let mut vars = full_env();
        vars.insert("VCG_VEHICLE_ID".to_string(), "VH-2".to_string());
        vars.insert("VCG_BASE_URL".to_string(), "http://localhost:9999".to_string());
        vars.insert("VCG_PORT".to_string(), "9090".to_string());

        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.vehicle_id.as_deref(), Some("VH-2"));
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut vars = full_env();
        vars.insert("VCG_PORT".to_string(), "not-a-port".to_string());

        assert!(Config::from_lookup(|k| vars.get(k).cloned()).is_err());
    }
}
