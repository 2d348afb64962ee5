//! Deliverable entity model.

use consult_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `deliverables` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Deliverable {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub weight: f64,
    /// `percent` or `points`; anything else is read as points.
    pub weight_unit: String,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
