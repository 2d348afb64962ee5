//! Repository for the `projects` table.

use consult_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::Project;

const COLUMNS: &str = "id, name, description, created_at, updated_at";

pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
