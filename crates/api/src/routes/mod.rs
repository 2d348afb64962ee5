pub mod deliverable;
pub mod health;
pub mod phase;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects/{id}/tree                 aggregated tree (GET, ?search=&status=&assignee=)
/// /projects/{id}/stats                aggregate statistics (GET)
///
/// /phases/{id}                        delete when empty (DELETE)
/// /deliverables/{id}                  delete when empty (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/phases", phase::router())
        .nest("/deliverables", deliverable::router())
}
