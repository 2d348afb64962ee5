pub mod deliverable;
pub mod phase;
pub mod project_tree;
