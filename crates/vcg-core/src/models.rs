//! Vehicle and command parameter models

use serde::{Deserialize, Serialize};

/// A vehicle on the account, as last reported by the vendor cloud
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vendor-assigned stable identifier
    pub id: String,
    /// Owner-chosen display name
    pub name: String,
    /// Model designation
    pub model: String,
    /// Model year (vendor payloads are inconsistent, carried as a string)
    pub year: String,
}

/// Seat heater setting for a single seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatHeaterStatus {
    On,
    Off,
    Low,
    Medium,
    High,
}

/// Parameters for a start-climate command.
///
/// All fields are optional on the wire; missing fields take the defaults
/// below. Constructed fresh per request, handed to the session client,
/// then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateRequest {
    /// Target cabin temperature in degrees Celsius
    pub set_temp: f64,
    /// Run duration in minutes
    pub duration: u32,
    pub air_condition: bool,
    pub defrost: bool,
    pub steering_wheel_heater: bool,
    pub rear_window_heater: bool,
    pub side_mirror_heater: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_left_seat_status: Option<SeatHeaterStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_right_seat_status: Option<SeatHeaterStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rear_left_seat_status: Option<SeatHeaterStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rear_right_seat_status: Option<SeatHeaterStatus>,
}

impl Default for ClimateRequest {
    fn default() -> Self {
        Self {
            set_temp: 22.0,
            duration: 10,
            air_condition: false,
            defrost: false,
            steering_wheel_heater: false,
            rear_window_heater: false,
            side_mirror_heater: false,
            front_left_seat_status: None,
            front_right_seat_status: None,
            rear_left_seat_status: None,
            rear_right_seat_status: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climate_request_defaults() {
        let req = ClimateRequest::default();
        assert_eq!(req.set_temp, 22.0);
        assert_eq!(req.duration, 10);
        assert!(!req.air_condition);
        assert!(!req.defrost);
        assert!(req.front_left_seat_status.is_none());
    }

    #[test]
    fn climate_request_empty_json_takes_defaults() {
        let req: ClimateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req, ClimateRequest::default());
    }

    #[test]
    fn climate_request_partial_json_merges_with_defaults() {
        let req: ClimateRequest =
            serde_json::from_str(r#"{"set_temp": 18.5, "defrost": true}"#).unwrap();
        assert_eq!(req.set_temp, 18.5);
        assert!(req.defrost);
        // Untouched fields keep their defaults
        assert_eq!(req.duration, 10);
        assert!(!req.air_condition);
    }

    #[test]
    fn seat_heater_status_round_trips_as_vendor_strings() {
        let req: ClimateRequest =
            serde_json::from_str(r#"{"front_left_seat_status": "On"}"#).unwrap();
        assert_eq!(req.front_left_seat_status, Some(SeatHeaterStatus::On));

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["front_left_seat_status"], "On");
        // Unset seats are omitted from the serialized body
        assert!(json.get("rear_left_seat_status").is_none());
    }

    #[test]
    fn seat_heater_status_rejects_unknown_values() {
        let res: Result<ClimateRequest, _> =
            serde_json::from_str(r#"{"front_left_seat_status": "Toasty"}"#);
        assert!(res.is_err());
    }
}
