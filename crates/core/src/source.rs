//! Boundary to whatever stores project records.
//!
//! The engine never fetches anything itself. A [`ProjectTreeSource`] hands it
//! a fully materialized [`RawProjectTree`]; retries, cancellation and caching
//! are the source's business.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::raw::RawProjectTree;
use crate::types::DbId;

/// Why a project tree could not be fetched.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Project {0} not found")]
    NotFound(DbId),

    #[error("Not authorized to read project {project_id}: {reason}")]
    Unauthorized { project_id: DbId, reason: String },

    /// Transient storage or network failure.
    #[error("Project store unavailable: {0}")]
    Unavailable(String),
}

impl From<FetchError> for CoreError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NotFound(id) => CoreError::NotFound {
                entity: "Project",
                id,
            },
            FetchError::Unauthorized { .. } => CoreError::Unauthorized(err.to_string()),
            FetchError::Unavailable(msg) => CoreError::Unavailable(msg),
        }
    }
}

/// Supplies raw phases and deliverables, each pre-joined with its children.
#[async_trait]
pub trait ProjectTreeSource: Send + Sync {
    async fn fetch_project_tree(&self, project_id: DbId) -> Result<RawProjectTree, FetchError>;
}

/// A source backed by a map, for tests and local demos.
#[derive(Debug, Default)]
pub struct InMemoryTreeSource {
    projects: RwLock<HashMap<DbId, RawProjectTree>>,
}

impl InMemoryTreeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used when wiring fixtures.
    pub fn with_project(mut self, project_id: DbId, tree: RawProjectTree) -> Self {
        self.projects.get_mut().insert(project_id, tree);
        self
    }

    /// Replace (or add) the stored tree of a project.
    pub async fn put(&self, project_id: DbId, tree: RawProjectTree) {
        self.projects.write().await.insert(project_id, tree);
    }
}

#[async_trait]
impl ProjectTreeSource for InMemoryTreeSource {
    async fn fetch_project_tree(&self, project_id: DbId) -> Result<RawProjectTree, FetchError> {
        self.projects
            .read()
            .await
            .get(&project_id)
            .cloned()
            .ok_or(FetchError::NotFound(project_id))
    }
}
