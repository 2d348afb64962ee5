//! Raw project records as delivered by a persistence collaborator.
//!
//! These are the only loosely-typed structures in the crate. Status and unit
//! fields stay as strings and numeric fields stay optional; the tree formatter
//! is the single place that turns them into typed [`TreeNode`]s.
//!
//! [`TreeNode`]: crate::node::TreeNode

use serde::{Deserialize, Serialize};

use crate::types::{Date, DbId};

/// A phase pre-joined with its activities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPhase {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Stored phase status. Ignored while phases derive status from activities.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "plannedStart")]
    pub planned_start: Option<Date>,
    #[serde(default, alias = "plannedEnd")]
    pub planned_end: Option<Date>,
    #[serde(default, alias = "displayOrder")]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub activities: Vec<RawActivity>,
}

/// A leaf unit of work inside a phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawActivity {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default, alias = "ownerId")]
    pub owner_id: Option<DbId>,
    #[serde(default, alias = "plannedStart")]
    pub planned_start: Option<Date>,
    #[serde(default, alias = "plannedEnd")]
    pub planned_end: Option<Date>,
    #[serde(default, alias = "actualStart")]
    pub actual_start: Option<Date>,
    #[serde(default, alias = "actualEnd")]
    pub actual_end: Option<Date>,
}

/// A weighted deliverable pre-joined with its parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDeliverable {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default, alias = "weightUnit")]
    pub weight_unit: Option<String>,
    #[serde(default, alias = "displayOrder")]
    pub display_order: Option<i32>,
    #[serde(default)]
    pub parts: Vec<RawPart>,
}

/// A leaf unit of a deliverable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPart {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "partWeight")]
    pub part_weight: Option<f64>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default, alias = "assignedTo", alias = "assigned_to")]
    pub assigned_user_id: Option<DbId>,
}

/// Everything fetched for one project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProjectTree {
    #[serde(default)]
    pub phases: Vec<RawPhase>,
    #[serde(default)]
    pub deliverables: Vec<RawDeliverable>,
}
