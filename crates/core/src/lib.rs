//! Progress and status aggregation engine for consulting project trees.
//!
//! Projects decompose into phases (owning activities) and deliverables
//! (owning parts). Everything in this crate except [`service`] is a pure,
//! synchronous function over in-memory data: raw records go in through
//! [`tree::format_tree`], a normalized [`node::TreeNode`] tree comes out, and
//! [`query`] / [`stats`] operate on that tree only.
//!
//! The crate has no database dependencies; persistence is reached through the
//! [`source::ProjectTreeSource`] trait implemented by `consult-db`.

pub mod error;
pub mod node;
pub mod progress;
pub mod query;
pub mod raw;
pub mod service;
pub mod source;
pub mod stats;
pub mod status;
pub mod tree;
pub mod types;
