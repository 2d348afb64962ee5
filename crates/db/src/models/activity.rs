//! Activity entity model.

use consult_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub phase_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub progress: i32,
    pub owner_id: Option<DbId>,
    pub planned_start: Option<Date>,
    pub planned_end: Option<Date>,
    pub actual_start: Option<Date>,
    pub actual_end: Option<Date>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
