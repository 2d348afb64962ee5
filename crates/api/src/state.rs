use std::sync::Arc;

use consult_core::service::ProjectTreeService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by the write handlers.
    pub pool: consult_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Fetch-and-aggregate service for project trees.
    pub trees: ProjectTreeService,
}
