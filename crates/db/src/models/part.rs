//! Part entity model.

use consult_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `parts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Part {
    pub id: DbId,
    pub deliverable_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub part_weight: f64,
    pub progress: i32,
    pub assigned_user_id: Option<DbId>,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
