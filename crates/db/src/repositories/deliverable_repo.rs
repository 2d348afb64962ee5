//! Repository for the `deliverables` table.

use consult_core::types::DbId;
use sqlx::PgPool;

use crate::models::deliverable::Deliverable;

const COLUMNS: &str = "id, project_id, title, description, status, weight, weight_unit, \
    display_order, created_at, updated_at";

pub struct DeliverableRepo;

impl DeliverableRepo {
    /// Find a deliverable by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Deliverable>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deliverables WHERE id = $1");
        sqlx::query_as::<_, Deliverable>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's deliverables in display order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Deliverable>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM deliverables
             WHERE project_id = $1
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, Deliverable>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a deliverable that owns no parts.
    ///
    /// Returns `false` if the deliverable does not exist or still has parts.
    pub async fn delete_if_empty(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM deliverables
             WHERE id = $1
               AND NOT EXISTS (SELECT 1 FROM parts WHERE deliverable_id = $1)",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
