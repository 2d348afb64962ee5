//! Route definitions for the `/deliverables` resource.

use axum::routing::delete;
use axum::Router;

use crate::handlers::deliverable;
use crate::state::AppState;

/// Routes mounted at `/deliverables`.
///
/// ```text
/// DELETE /{id}                      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(deliverable::delete))
}
