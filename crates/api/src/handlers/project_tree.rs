//! Handlers for the aggregated project tree.

use axum::extract::{Path, Query, State};
use axum::Json;
use consult_core::stats::TreeStats;
use consult_core::tree::ProjectTree;
use consult_core::types::DbId;

use crate::error::AppResult;
use crate::query::TreeQueryParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/{id}/tree
///
/// Returns the normalized tree with derived statuses and progress. Optional
/// `search`, `status` and `assignee` parameters narrow the phases and
/// deliverables returned; the summary always covers the whole project.
pub async fn get_tree(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(params): Query<TreeQueryParams>,
) -> AppResult<Json<DataResponse<ProjectTree>>> {
    let filter = params.into_filter()?;
    let tree = state.trees.load_filtered(project_id, &filter).await?;
    Ok(Json(DataResponse { data: tree }))
}

/// GET /api/v1/projects/{id}/stats
pub async fn get_stats(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<TreeStats>>> {
    let stats = state.trees.stats(project_id).await?;
    Ok(Json(DataResponse { data: stats }))
}
