//! Port contracts for priority persistence.

pub mod repository;

pub use repository::{PriorityRepository, PriorityRepositoryError, PriorityRepositoryResult};
