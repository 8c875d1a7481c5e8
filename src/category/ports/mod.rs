//! Port contracts for category persistence.

pub mod repository;

pub use repository::{CategoryRepository, CategoryRepositoryError, CategoryRepositoryResult};
