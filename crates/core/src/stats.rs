//! Aggregate counts and completion rates over a formatted tree.

use serde::{Deserialize, Serialize};

use crate::node::TreeNode;
use crate::progress::{completion_rate, sanitize_weight, weight_completion_rate};
use crate::status::Status;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseStats {
    pub total: usize,
    pub done: usize,
    pub in_progress: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableStats {
    pub total: usize,
    pub approved: usize,
    pub in_progress: usize,
}

/// Leaf counts shared by activities (completed = done) and parts
/// (completed = approved).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafStats {
    pub total: usize,
    pub completed: usize,
    pub completion_rate: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightStats {
    pub total_weight: f64,
    pub completed_weight: f64,
    pub completion_rate: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeStats {
    pub phases: PhaseStats,
    pub activities: LeafStats,
    pub deliverables: DeliverableStats,
    pub parts: LeafStats,
    pub weight: WeightStats,
}

/// Compute statistics for the given phases and deliverables.
///
/// Weight completion counts a deliverable's weight as completed only when the
/// deliverable itself is approved; part approvals do not contribute.
pub fn compute_stats(phases: &[TreeNode], deliverables: &[TreeNode]) -> TreeStats {
    let activities: Vec<&TreeNode> = phases.iter().flat_map(|p| p.children()).collect();
    let parts: Vec<&TreeNode> = deliverables.iter().flat_map(|d| d.children()).collect();

    let total_weight: f64 = deliverables.iter().map(node_weight).sum();
    let completed_weight: f64 = deliverables
        .iter()
        .filter(|d| d.status == Status::Approved)
        .map(node_weight)
        .sum();

    TreeStats {
        phases: PhaseStats {
            total: phases.len(),
            done: count_status(phases.iter(), Status::Done),
            in_progress: count_status(phases.iter(), Status::InProgress),
        },
        activities: leaf_stats(&activities, Status::Done),
        deliverables: DeliverableStats {
            total: deliverables.len(),
            approved: count_status(deliverables.iter(), Status::Approved),
            in_progress: count_status(deliverables.iter(), Status::InProgress),
        },
        parts: leaf_stats(&parts, Status::Approved),
        weight: WeightStats {
            total_weight,
            completed_weight,
            completion_rate: weight_completion_rate(completed_weight, total_weight),
        },
    }
}

fn leaf_stats(leaves: &[&TreeNode], completed_status: Status) -> LeafStats {
    let completed = count_status(leaves.iter().copied(), completed_status);
    LeafStats {
        total: leaves.len(),
        completed,
        completion_rate: completion_rate(completed, leaves.len()),
    }
}

fn count_status<'a>(nodes: impl Iterator<Item = &'a TreeNode>, status: Status) -> usize {
    nodes.filter(|n| n.status == status).count()
}

fn node_weight(node: &TreeNode) -> f64 {
    sanitize_weight(node.weight.unwrap_or(0.0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
