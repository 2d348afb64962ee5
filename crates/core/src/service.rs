//! Fetch-then-compute service handed to request handlers.
//!
//! Constructed once with a [`ProjectTreeSource`] and shared behind an `Arc`.
//! Each call refetches the project and recomputes from scratch; there is no
//! caching and no shared mutable state.

use std::sync::Arc;
use std::time::Instant;

use crate::error::CoreError;
use crate::query::TreeFilter;
use crate::source::ProjectTreeSource;
use crate::stats::{compute_stats, TreeStats};
use crate::tree::{format_tree, summarize, FormattedTree, ProjectTree};
use crate::types::DbId;

#[derive(Clone)]
pub struct ProjectTreeService {
    source: Arc<dyn ProjectTreeSource>,
}

impl ProjectTreeService {
    pub fn new(source: Arc<dyn ProjectTreeSource>) -> Self {
        Self { source }
    }

    /// Fetch and format a project's full tree.
    pub async fn load(&self, project_id: DbId) -> Result<ProjectTree, CoreError> {
        self.load_filtered(project_id, &TreeFilter::default()).await
    }

    /// Fetch, format and filter a project's tree.
    ///
    /// The summary always describes the unfiltered tree so headline numbers
    /// do not jump around while a user types a search term.
    pub async fn load_filtered(
        &self,
        project_id: DbId,
        filter: &TreeFilter,
    ) -> Result<ProjectTree, CoreError> {
        let tree = self.fetch_formatted(project_id).await?;
        let summary = summarize(&tree);

        let visible = if filter.is_empty() {
            tree
        } else {
            let filtered = filter.apply(&tree);
            tracing::debug!(
                project_id,
                phases = filtered.phases.len(),
                deliverables = filtered.deliverables.len(),
                "Applied tree filter"
            );
            filtered
        };

        Ok(ProjectTree {
            project_id: project_id.to_string(),
            phases: visible.phases,
            deliverables: visible.deliverables,
            summary,
        })
    }

    /// Fetch a project and compute its statistics.
    pub async fn stats(&self, project_id: DbId) -> Result<TreeStats, CoreError> {
        let tree = self.fetch_formatted(project_id).await?;
        Ok(compute_stats(&tree.phases, &tree.deliverables))
    }

    async fn fetch_formatted(&self, project_id: DbId) -> Result<FormattedTree, CoreError> {
        let raw = self
            .source
            .fetch_project_tree(project_id)
            .await
            .inspect_err(|e| tracing::warn!(project_id, error = %e, "Project tree fetch failed"))?;

        let started = Instant::now();
        let tree = format_tree(&raw.phases, &raw.deliverables);
        tracing::debug!(
            project_id,
            phases = tree.phases.len(),
            deliverables = tree.deliverables.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Formatted project tree"
        );
        Ok(tree)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
