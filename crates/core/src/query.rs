//! Search and filter operations over a formatted tree.
//!
//! Every operation works at phase/deliverable granularity: a top-level node
//! is either kept whole (with all of its children) or dropped. Inputs are
//! never mutated, so the operations compose freely.

use serde::{Deserialize, Serialize};

use crate::node::TreeNode;
use crate::status::Status;
use crate::tree::FormattedTree;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Keep phases and deliverables whose own name/description, or the
/// name/description of any direct child, contains `term` (case-insensitive).
///
/// A blank (empty or whitespace-only) term keeps everything. Any other term
/// is matched as given, surrounding whitespace included.
pub fn search(tree: &FormattedTree, term: &str) -> FormattedTree {
    if term.trim().is_empty() {
        return tree.clone();
    }
    let needle = term.to_lowercase();
    retain(tree, |node| {
        text_matches(node, &needle) || node.children().iter().any(|c| text_matches(c, &needle))
    })
}

/// Keep phases and deliverables whose own status equals `status`.
pub fn filter_by_status(tree: &FormattedTree, status: Status) -> FormattedTree {
    retain(tree, |node| node.status == status)
}

/// Keep phases with an activity owned by `user_id` and deliverables with a
/// part assigned to `user_id`.
pub fn filter_by_assignee(tree: &FormattedTree, user_id: DbId) -> FormattedTree {
    retain(tree, |node| {
        node.children().iter().any(|c| c.assignee_id == Some(user_id))
    })
}

// ---------------------------------------------------------------------------
// Combined filter
// ---------------------------------------------------------------------------

/// Optional criteria applied in order: search, then status, then assignee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeFilter {
    pub search: Option<String>,
    pub status: Option<Status>,
    pub assignee: Option<DbId>,
}

impl TreeFilter {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.status.is_none()
            && self.assignee.is_none()
    }

    pub fn apply(&self, tree: &FormattedTree) -> FormattedTree {
        let mut out = match self.search.as_deref() {
            Some(term) => search(tree, term),
            None => tree.clone(),
        };
        if let Some(status) = self.status {
            out = filter_by_status(&out, status);
        }
        if let Some(user_id) = self.assignee {
            out = filter_by_assignee(&out, user_id);
        }
        out
    }
}

fn retain(tree: &FormattedTree, keep: impl Fn(&TreeNode) -> bool) -> FormattedTree {
    FormattedTree {
        phases: tree.phases.iter().filter(|n| keep(*n)).cloned().collect(),
        deliverables: tree.deliverables.iter().filter(|n| keep(*n)).cloned().collect(),
    }
}

fn text_matches(node: &TreeNode, needle: &str) -> bool {
    node.name.to_lowercase().contains(needle) || node.description.to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
