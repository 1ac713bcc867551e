//! Door lock/unlock handlers

use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::handlers::CommandAck;
use crate::state::AppState;

/// POST /lock_car
pub async fn lock_car(State(state): State<AppState>) -> Result<Json<CommandAck>, ApiError> {
    let result = state
        .run_command(|client, target| async move { client.lock(&target).await })
        .await?;

    Ok(Json(CommandAck {
        status: "Car locked",
        result: result.command_id,
    }))
}

/// POST /unlock_car
pub async fn unlock_car(State(state): State<AppState>) -> Result<Json<CommandAck>, ApiError> {
    let result = state
        .run_command(|client, target| async move { client.unlock(&target).await })
        .await?;

    Ok(Json(CommandAck {
        status: "Car unlocked",
        result: result.command_id,
    }))
}
