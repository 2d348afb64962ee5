//! Route definitions for project-scoped read models.

use axum::routing::get;
use axum::Router;

use crate::handlers::project_tree;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /{id}/tree                 -> get_tree
/// GET    /{id}/stats                -> get_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/tree", get(project_tree::get_tree))
        .route("/{id}/stats", get(project_tree::get_stats))
}
