//! Climate control handlers

use axum::extract::State;
use axum::Json;

use vcg_core::ClimateRequest;

use crate::error::ApiError;
use crate::handlers::CommandAck;
use crate::state::AppState;

/// POST /start_climate
///
/// Body is a `ClimateRequest` with every field optional; an absent body is
/// treated as an all-defaults request. The merged (provided ∪ default)
/// values are passed downstream unchanged.
pub async fn start_climate(
    State(state): State<AppState>,
    body: Option<Json<ClimateRequest>>,
) -> Result<Json<CommandAck>, ApiError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let result = state
        .run_command(|client, target| async move {
            client.start_climate(&target, &request).await
        })
        .await?;

    Ok(Json(CommandAck {
        status: "Climate started",
        result: result.command_id,
    }))
}

/// POST /stop_climate
pub async fn stop_climate(State(state): State<AppState>) -> Result<Json<CommandAck>, ApiError> {
    let result = state
        .run_command(|client, target| async move { client.stop_climate(&target).await })
        .await?;

    Ok(Json(CommandAck {
        status: "Climate stopped",
        result: result.command_id,
    }))
}
