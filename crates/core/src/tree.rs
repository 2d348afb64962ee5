//! Tree formatter: raw records in, normalized [`TreeNode`] tree out.
//!
//! This is the single ingress boundary. Every string status is parsed, every
//! progress value clamped and every rollup computed here; nothing downstream
//! sees a raw record.

use serde::{Deserialize, Serialize};

use crate::node::{NodeType, TreeNode, WeightUnit};
use crate::progress::{clamp_progress, overall_progress, unweighted_mean, weighted_completion};
use crate::raw::{RawActivity, RawDeliverable, RawPart, RawPhase, RawProjectTree};
use crate::status::{derive_status, Status, StatusPolicy};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// The two top-level collections of a project tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattedTree {
    pub phases: Vec<TreeNode>,
    pub deliverables: Vec<TreeNode>,
}

/// Headline numbers for a project tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeSummary {
    pub total_phases: usize,
    pub total_activities: usize,
    pub total_deliverables: usize,
    pub total_parts: usize,
    pub overall_progress: u8,
}

/// The read-only payload handed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTree {
    pub project_id: String,
    pub phases: Vec<TreeNode>,
    pub deliverables: Vec<TreeNode>,
    pub summary: TreeSummary,
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Normalize raw phases and deliverables into typed tree nodes.
///
/// Top-level nodes are ordered by `display_order`; records without an order
/// sort after those with one. The sort is stable, so equal or missing orders
/// keep their input order. Children keep their input order.
pub fn format_tree(raw_phases: &[RawPhase], raw_deliverables: &[RawDeliverable]) -> FormattedTree {
    let mut phases: Vec<&RawPhase> = raw_phases.iter().collect();
    phases.sort_by_key(|p| sort_key(p.display_order));

    let mut deliverables: Vec<&RawDeliverable> = raw_deliverables.iter().collect();
    deliverables.sort_by_key(|d| sort_key(d.display_order));

    FormattedTree {
        phases: phases.into_iter().map(format_phase).collect(),
        deliverables: deliverables.into_iter().map(format_deliverable).collect(),
    }
}

/// Format a single phase with its activities.
///
/// Progress is the mean of the activities' stored progress, rounded once.
pub fn format_phase(raw: &RawPhase) -> TreeNode {
    let children: Vec<TreeNode> = raw.activities.iter().map(format_activity).collect();
    let progresses: Vec<f64> = raw
        .activities
        .iter()
        .map(|a| a.progress.unwrap_or(0.0))
        .collect();

    let mut node = TreeNode::new(raw.id, raw.title.clone(), NodeType::Phase);
    node.status = resolve_status(NodeType::Phase, raw.status.as_deref(), &children);
    node.description = raw.description.clone().unwrap_or_default();
    node.progress = unweighted_mean(&progresses);
    node.can_delete = children.is_empty();
    node.planned_start = raw.planned_start;
    node.planned_end = raw.planned_end;
    node.children = Some(children);
    node
}

/// Format a single activity. Activities are always editable and deletable.
pub fn format_activity(raw: &RawActivity) -> TreeNode {
    let mut node = TreeNode::new(raw.id, raw.title.clone(), NodeType::Activity);
    node.status = resolve_status(NodeType::Activity, raw.status.as_deref(), &[]);
    node.description = raw.description.clone().unwrap_or_default();
    node.progress = clamp_progress(raw.progress.unwrap_or(0.0));
    node.assignee_id = raw.owner_id;
    node.planned_start = raw.planned_start;
    node.planned_end = raw.planned_end;
    node.actual_start = raw.actual_start;
    node.actual_end = raw.actual_end;
    node
}

/// Format a single deliverable with its parts.
///
/// Only the progress is rolled up from the parts; the status follows the
/// deliverable's [`StatusPolicy`].
pub fn format_deliverable(raw: &RawDeliverable) -> TreeNode {
    let children: Vec<TreeNode> = raw.parts.iter().map(format_part).collect();

    let weighted: Vec<(Status, f64)> = raw
        .parts
        .iter()
        .zip(&children)
        .map(|(part, node)| (node.status, part.part_weight.unwrap_or(0.0)))
        .collect();

    let mut node = TreeNode::new(raw.id, raw.title.clone(), NodeType::Deliverable);
    node.status = resolve_status(NodeType::Deliverable, raw.status.as_deref(), &children);
    node.description = raw.description.clone().unwrap_or_default();
    node.progress = weighted_completion(&weighted);
    node.weight = Some(raw.weight.filter(|w| w.is_finite()).unwrap_or(0.0));
    node.weight_unit = Some(WeightUnit::normalize(raw.weight_unit.as_deref()));
    node.can_delete = children.is_empty();
    node.can_upload = Some(true);
    node.children = Some(children);
    node
}

/// Format a single part. Its progress is the stored value, not derived.
pub fn format_part(raw: &RawPart) -> TreeNode {
    let mut node = TreeNode::new(raw.id, raw.title.clone(), NodeType::Part);
    node.status = resolve_status(NodeType::Part, raw.status.as_deref(), &[]);
    node.description = raw.description.clone().unwrap_or_default();
    node.progress = clamp_progress(raw.progress.unwrap_or(0.0));
    node.weight = raw.part_weight.filter(|w| w.is_finite());
    node.can_upload = Some(true);
    node.assignee_id = raw.assigned_user_id;
    node
}

/// Status of a node according to its type's [`StatusPolicy`].
fn resolve_status(node_type: NodeType, stored: Option<&str>, children: &[TreeNode]) -> Status {
    match node_type.status_policy() {
        StatusPolicy::DerivedFromChildren => {
            let statuses: Vec<Status> = children.iter().map(|c| c.status).collect();
            derive_status(&statuses, node_type.completed_status())
        }
        StatusPolicy::StoredAuthoritative => node_type.parse_status(stored),
    }
}

// ---------------------------------------------------------------------------
// Summary and envelope
// ---------------------------------------------------------------------------

/// Count nodes and compute the project-wide progress of a formatted tree.
pub fn summarize(tree: &FormattedTree) -> TreeSummary {
    let phase_progress: Vec<u8> = tree.phases.iter().map(|p| p.progress).collect();
    let deliverable_progress: Vec<u8> = tree.deliverables.iter().map(|d| d.progress).collect();

    TreeSummary {
        total_phases: tree.phases.len(),
        total_activities: tree.phases.iter().map(|p| p.children().len()).sum(),
        total_deliverables: tree.deliverables.len(),
        total_parts: tree.deliverables.iter().map(|d| d.children().len()).sum(),
        overall_progress: overall_progress(&phase_progress, &deliverable_progress),
    }
}

/// Format a fetched project and wrap it in the consumer-facing envelope.
pub fn build_project_tree(project_id: DbId, raw: &RawProjectTree) -> ProjectTree {
    let tree = format_tree(&raw.phases, &raw.deliverables);
    let summary = summarize(&tree);
    ProjectTree {
        project_id: project_id.to_string(),
        phases: tree.phases,
        deliverables: tree.deliverables,
        summary,
    }
}

fn sort_key(order: Option<i32>) -> (bool, i32) {
    (order.is_none(), order.unwrap_or(0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
