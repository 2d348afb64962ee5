//! Route definitions for the `/phases` resource.

use axum::routing::delete;
use axum::Router;

use crate::handlers::phase;
use crate::state::AppState;

/// Routes mounted at `/phases`.
///
/// ```text
/// DELETE /{id}                      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(phase::delete))
}
