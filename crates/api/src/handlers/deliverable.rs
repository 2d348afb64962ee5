//! Handlers for the `/deliverables` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use consult_core::error::CoreError;
use consult_core::node::{ensure_deletable, NodeType};
use consult_core::types::DbId;
use consult_db::repositories::{DeliverableRepo, PartRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// DELETE /api/v1/deliverables/{id}
///
/// Only deliverables without parts can be deleted.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    DeliverableRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Deliverable",
            id,
        }))?;

    let parts = PartRepo::count_by_deliverable(&state.pool, id).await?;
    ensure_deletable(NodeType::Deliverable, id, parts.max(0) as usize)?;

    if !DeliverableRepo::delete_if_empty(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Deliverable {id} changed while being deleted"
        ))));
    }

    tracing::info!(deliverable_id = id, "Deliverable deleted");
    Ok(StatusCode::NO_CONTENT)
}
