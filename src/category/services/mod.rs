//! Application services for category management.

mod manage;

pub use manage::{CategoryService, CategoryServiceError, CategoryServiceResult};
