//! Handlers for the `/phases` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use consult_core::error::CoreError;
use consult_core::node::{ensure_deletable, NodeType};
use consult_core::types::DbId;
use consult_db::repositories::{ActivityRepo, PhaseRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// DELETE /api/v1/phases/{id}
///
/// Only phases without activities can be deleted.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    PhaseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Phase", id }))?;

    let activities = ActivityRepo::count_by_phase(&state.pool, id).await?;
    ensure_deletable(NodeType::Phase, id, activities.max(0) as usize)?;

    if !PhaseRepo::delete_if_empty(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Phase {id} changed while being deleted"
        ))));
    }

    tracing::info!(phase_id = id, "Phase deleted");
    Ok(StatusCode::NO_CONTENT)
}
