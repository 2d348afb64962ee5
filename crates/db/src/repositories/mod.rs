//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod activity_repo;
pub mod deliverable_repo;
pub mod part_repo;
pub mod phase_repo;
pub mod project_repo;

pub use activity_repo::ActivityRepo;
pub use deliverable_repo::DeliverableRepo;
pub use part_repo::PartRepo;
pub use phase_repo::PhaseRepo;
pub use project_repo::ProjectRepo;
