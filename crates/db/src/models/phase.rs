//! Phase entity model.

use consult_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `phases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Phase {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub planned_start: Option<Date>,
    pub planned_end: Option<Date>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
