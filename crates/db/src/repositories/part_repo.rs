//! Repository for the `parts` table.

use consult_core::types::DbId;
use sqlx::PgPool;

use crate::models::part::Part;

const COLUMNS: &str = "pt.id, pt.deliverable_id, pt.title, pt.description, pt.status, \
    pt.part_weight, pt.progress, pt.assigned_user_id, pt.display_order, \
    pt.created_at, pt.updated_at";

pub struct PartRepo;

impl PartRepo {
    /// List every part of every deliverable in a project.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Part>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM parts pt
             JOIN deliverables d ON d.id = pt.deliverable_id
             WHERE d.project_id = $1
             ORDER BY pt.deliverable_id ASC, pt.display_order ASC, pt.id ASC"
        );
        sqlx::query_as::<_, Part>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Number of parts owned by a deliverable.
    pub async fn count_by_deliverable(
        pool: &PgPool,
        deliverable_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM parts WHERE deliverable_id = $1")
            .bind(deliverable_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
