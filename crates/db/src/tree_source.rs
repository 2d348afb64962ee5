//! PostgreSQL-backed [`ProjectTreeSource`].
//!
//! Loads the four tables of a project with one query each and pre-joins the
//! child rows into their parents before handing them to the engine.

use std::collections::HashMap;

use async_trait::async_trait;
use consult_core::raw::{RawActivity, RawDeliverable, RawPart, RawPhase, RawProjectTree};
use consult_core::source::{FetchError, ProjectTreeSource};
use consult_core::types::DbId;

use crate::models::activity::Activity;
use crate::models::deliverable::Deliverable;
use crate::models::part::Part;
use crate::models::phase::Phase;
use crate::repositories::{ActivityRepo, DeliverableRepo, PartRepo, PhaseRepo, ProjectRepo};
use crate::DbPool;

/// Reads project trees straight from the database on every call.
#[derive(Clone)]
pub struct PgProjectTreeSource {
    pool: DbPool,
}

impl PgProjectTreeSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectTreeSource for PgProjectTreeSource {
    async fn fetch_project_tree(&self, project_id: DbId) -> Result<RawProjectTree, FetchError> {
        let project = ProjectRepo::find_by_id(&self.pool, project_id)
            .await
            .map_err(unavailable)?
            .ok_or(FetchError::NotFound(project_id))?;

        let phases = PhaseRepo::list_by_project(&self.pool, project_id)
            .await
            .map_err(unavailable)?;
        let activities = ActivityRepo::list_by_project(&self.pool, project_id)
            .await
            .map_err(unavailable)?;
        let deliverables = DeliverableRepo::list_by_project(&self.pool, project_id)
            .await
            .map_err(unavailable)?;
        let parts = PartRepo::list_by_project(&self.pool, project_id)
            .await
            .map_err(unavailable)?;

        tracing::debug!(
            project_id,
            project = %project.name,
            phases = phases.len(),
            activities = activities.len(),
            deliverables = deliverables.len(),
            parts = parts.len(),
            "Loaded project rows"
        );

        Ok(assemble_raw_tree(phases, activities, deliverables, parts))
    }
}

fn unavailable(err: sqlx::Error) -> FetchError {
    tracing::error!(error = %err, "Project tree query failed");
    FetchError::Unavailable(err.to_string())
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Attach activities to their phases and parts to their deliverables.
///
/// Parent order and child order are taken from the input as-is. Child rows
/// whose parent is not in the input are dropped.
pub fn assemble_raw_tree(
    phases: Vec<Phase>,
    activities: Vec<Activity>,
    deliverables: Vec<Deliverable>,
    parts: Vec<Part>,
) -> RawProjectTree {
    let mut activities_by_phase: HashMap<DbId, Vec<RawActivity>> = HashMap::new();
    for activity in activities {
        activities_by_phase
            .entry(activity.phase_id)
            .or_default()
            .push(activity.into());
    }

    let mut parts_by_deliverable: HashMap<DbId, Vec<RawPart>> = HashMap::new();
    for part in parts {
        parts_by_deliverable
            .entry(part.deliverable_id)
            .or_default()
            .push(part.into());
    }

    let phases: Vec<RawPhase> = phases
        .into_iter()
        .map(|phase| {
            let children = activities_by_phase.remove(&phase.id).unwrap_or_default();
            raw_phase(phase, children)
        })
        .collect();

    let deliverables: Vec<RawDeliverable> = deliverables
        .into_iter()
        .map(|deliverable| {
            let children = parts_by_deliverable.remove(&deliverable.id).unwrap_or_default();
            raw_deliverable(deliverable, children)
        })
        .collect();

    let orphans: usize = activities_by_phase.values().map(Vec::len).sum::<usize>()
        + parts_by_deliverable.values().map(Vec::len).sum::<usize>();
    if orphans > 0 {
        tracing::warn!(orphans, "Dropped child rows without a parent in the project");
    }

    RawProjectTree {
        phases,
        deliverables,
    }
}

fn raw_phase(row: Phase, activities: Vec<RawActivity>) -> RawPhase {
    RawPhase {
        id: row.id,
        title: row.title,
        description: row.description,
        status: row.status,
        planned_start: row.planned_start,
        planned_end: row.planned_end,
        display_order: Some(row.display_order),
        activities,
    }
}

fn raw_deliverable(row: Deliverable, parts: Vec<RawPart>) -> RawDeliverable {
    RawDeliverable {
        id: row.id,
        title: row.title,
        description: row.description,
        status: Some(row.status),
        weight: Some(row.weight),
        weight_unit: Some(row.weight_unit),
        display_order: Some(row.display_order),
        parts,
    }
}

impl From<Activity> for RawActivity {
    fn from(row: Activity) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            status: Some(row.status),
            progress: Some(f64::from(row.progress)),
            owner_id: row.owner_id,
            planned_start: row.planned_start,
            planned_end: row.planned_end,
            actual_start: row.actual_start,
            actual_end: row.actual_end,
        }
    }
}

impl From<Part> for RawPart {
    fn from(row: Part) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            status: Some(row.status),
            part_weight: Some(row.part_weight),
            progress: Some(f64::from(row.progress)),
            assigned_user_id: row.assigned_user_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use consult_core::status::Status;
    use consult_core::tree::build_project_tree;
    use consult_core::types::Timestamp;

    use super::*;

    fn ts() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn phase(id: DbId, order: i32) -> Phase {
        Phase {
            id,
            project_id: 1,
            title: format!("Phase {id}"),
            description: None,
            status: None,
            planned_start: None,
            planned_end: None,
            display_order: order,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn activity(id: DbId, phase_id: DbId, status: &str, progress: i32) -> Activity {
        Activity {
            id,
            phase_id,
            title: format!("Activity {id}"),
            description: None,
            status: status.to_string(),
            progress,
            owner_id: None,
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
            display_order: 0,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn deliverable(id: DbId, weight: f64) -> Deliverable {
        Deliverable {
            id,
            project_id: 1,
            title: format!("Deliverable {id}"),
            description: None,
            status: "not_started".to_string(),
            weight,
            weight_unit: "percent".to_string(),
            display_order: 0,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    fn part(id: DbId, deliverable_id: DbId, status: &str, weight: f64) -> Part {
        Part {
            id,
            deliverable_id,
            title: format!("Part {id}"),
            description: None,
            status: status.to_string(),
            part_weight: weight,
            progress: 0,
            assigned_user_id: Some(9),
            display_order: 0,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    #[test]
    fn children_are_attached_to_their_parents() {
        let raw = assemble_raw_tree(
            vec![phase(1, 0), phase(2, 1)],
            vec![
                activity(10, 1, "done", 100),
                activity(20, 2, "in_progress", 40),
                activity(11, 1, "done", 100),
            ],
            vec![deliverable(5, 100.0)],
            vec![part(50, 5, "APPROVED", 60.0), part(51, 5, "IN_PROGRESS", 40.0)],
        );

        let phase_children: Vec<Vec<DbId>> = raw
            .phases
            .iter()
            .map(|p| p.activities.iter().map(|a| a.id).collect())
            .collect();
        assert_eq!(phase_children, vec![vec![10, 11], vec![20]]);
        assert_eq!(raw.deliverables[0].parts.len(), 2);
        assert_eq!(raw.deliverables[0].parts[0].assigned_user_id, Some(9));
    }

    #[test]
    fn parents_without_children_get_empty_lists() {
        let raw = assemble_raw_tree(vec![phase(1, 0)], vec![], vec![deliverable(2, 0.0)], vec![]);
        assert!(raw.phases[0].activities.is_empty());
        assert!(raw.deliverables[0].parts.is_empty());
    }

    #[test]
    fn orphan_rows_are_dropped() {
        let raw = assemble_raw_tree(
            vec![phase(1, 0)],
            vec![activity(10, 99, "done", 100)],
            vec![],
            vec![],
        );
        assert!(raw.phases[0].activities.is_empty());
    }

    #[test]
    fn assembled_rows_feed_the_formatter() {
        let raw = assemble_raw_tree(
            vec![phase(1, 0)],
            vec![activity(10, 1, "done", 100), activity(11, 1, "not_started", 0)],
            vec![deliverable(5, 100.0)],
            vec![part(50, 5, "APPROVED", 60.0), part(51, 5, "IN_PROGRESS", 40.0)],
        );
        let tree = build_project_tree(1, &raw);
        assert_eq!(tree.phases[0].status, Status::InProgress);
        assert_eq!(tree.phases[0].progress, 50);
        assert_eq!(tree.deliverables[0].progress, 80);
        assert_eq!(tree.summary.overall_progress, 65);
    }
}
