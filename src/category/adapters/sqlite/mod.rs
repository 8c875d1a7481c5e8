//! SQLite adapters for category persistence.

mod models;
mod repository;

pub use repository::SqliteCategoryRepository;
