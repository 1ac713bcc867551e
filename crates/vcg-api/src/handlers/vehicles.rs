//! Vehicle listing handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct VehicleListResponse {
    pub status: &'static str,
    pub vehicles: Vec<VehicleSummary>,
}

/// Direct projection of a registry vehicle's id/name/model/year
#[derive(Serialize)]
pub struct VehicleSummary {
    pub id: String,
    pub name: String,
    pub model: String,
    pub year: String,
}

/// GET /list_vehicles
/// Refresh the registry and return every vehicle on the account
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<VehicleListResponse>, ApiError> {
    let snapshot = state.refresh().await?;

    if snapshot.is_empty() {
        return Err(ApiError::NotFound("No vehicles found".to_string()));
    }

    let vehicles = snapshot
        .into_iter()
        .map(|v| VehicleSummary {
            id: v.id,
            name: v.name,
            model: v.model,
            year: v.year,
        })
        .collect();

    Ok(Json(VehicleListResponse {
        status: "Success",
        vehicles,
    }))
}
