//! Row structs for the execution tree tables.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Status and unit columns are plain text here; they are
//! only interpreted once the rows reach the tree formatter.

pub mod activity;
pub mod deliverable;
pub mod part;
pub mod phase;
pub mod project;
