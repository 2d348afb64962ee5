//! Normalized tree nodes.
//!
//! A [`TreeNode`] has the same shape for every level of the tree. The query
//! and statistics engines only ever see this representation.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::status::{Status, StatusPolicy};
use crate::types::{Date, DbId};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Phase,
    Activity,
    Deliverable,
    Part,
}

impl NodeType {
    /// Where this node type's status comes from.
    pub fn status_policy(&self) -> StatusPolicy {
        match self {
            Self::Phase => StatusPolicy::DerivedFromChildren,
            Self::Activity | Self::Deliverable | Self::Part => StatusPolicy::StoredAuthoritative,
        }
    }

    /// Terminal status of this node type's vocabulary.
    pub fn completed_status(&self) -> Status {
        match self {
            Self::Phase | Self::Activity => Status::Done,
            Self::Deliverable | Self::Part => Status::Approved,
        }
    }

    /// Interpret a stored status string in this node type's vocabulary.
    pub fn parse_status(&self, raw: Option<&str>) -> Status {
        match self {
            Self::Phase | Self::Activity => Status::parse_activity(raw),
            Self::Deliverable | Self::Part => Status::parse_part(raw),
        }
    }

    /// Entity name used in error messages.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Self::Phase => "Phase",
            Self::Activity => "Activity",
            Self::Deliverable => "Deliverable",
            Self::Part => "Part",
        }
    }

    /// Whether nodes of this type own children.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Phase | Self::Deliverable)
    }
}

/// Unit of a deliverable weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    Percent,
    #[default]
    Points,
}

impl WeightUnit {
    /// `percent` only when the raw unit says so (any case); everything else,
    /// including a missing unit, is `points`.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some(unit) if unit.trim().eq_ignore_ascii_case("percent") => Self::Percent,
            _ => Self::Points,
        }
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One node of the normalized project tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub status: Status,
    pub description: String,
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<WeightUnit>,
    pub can_edit: bool,
    pub can_delete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_upload: Option<bool>,
    /// Activity owner or part assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_start: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_end: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    /// A bare node with the given identity; every optional field unset.
    pub fn new(id: DbId, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id,
            name: name.into(),
            node_type,
            status: Status::NotStarted,
            description: String::new(),
            progress: 0,
            weight: None,
            weight_unit: None,
            can_edit: true,
            can_delete: true,
            can_upload: None,
            assignee_id: None,
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
            children: None,
        }
    }

    /// Direct children, empty for leaves.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Whether the node owns at least one child.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Deletion guard
// ---------------------------------------------------------------------------

/// A phase or deliverable may only be deleted once it owns no children.
/// Activities and parts are always deletable.
pub fn ensure_deletable(
    node_type: NodeType,
    id: DbId,
    child_count: usize,
) -> Result<(), CoreError> {
    if node_type.is_container() && child_count > 0 {
        let children = match node_type {
            NodeType::Phase => "activities",
            _ => "parts",
        };
        return Err(CoreError::Conflict(format!(
            "{} {id} still owns {child_count} {children} and cannot be deleted",
            node_type.entity_name()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
