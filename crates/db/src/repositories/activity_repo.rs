//! Repository for the `activities` table.

use consult_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity::Activity;

const COLUMNS: &str = "a.id, a.phase_id, a.title, a.description, a.status, a.progress, \
    a.owner_id, a.planned_start, a.planned_end, a.actual_start, a.actual_end, \
    a.display_order, a.created_at, a.updated_at";

pub struct ActivityRepo;

impl ActivityRepo {
    /// List every activity of every phase in a project, ordered by phase
    /// then by the activity's display order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities a
             JOIN phases p ON p.id = a.phase_id
             WHERE p.project_id = $1
             ORDER BY a.phase_id ASC, a.display_order ASC, a.id ASC"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Number of activities owned by a phase.
    pub async fn count_by_phase(pool: &PgPool, phase_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activities WHERE phase_id = $1")
            .bind(phase_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
