//! Repository for the `phases` table.

use consult_core::types::DbId;
use sqlx::PgPool;

use crate::models::phase::Phase;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, status, planned_start, \
    planned_end, display_order, created_at, updated_at";

pub struct PhaseRepo;

impl PhaseRepo {
    /// Find a phase by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Phase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM phases WHERE id = $1");
        sqlx::query_as::<_, Phase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's phases in display order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Phase>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM phases
             WHERE project_id = $1
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, Phase>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a phase that owns no activities.
    ///
    /// Returns `false` if the phase does not exist or still has activities.
    pub async fn delete_if_empty(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM phases
             WHERE id = $1
               AND NOT EXISTS (SELECT 1 FROM activities WHERE phase_id = $1)",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
