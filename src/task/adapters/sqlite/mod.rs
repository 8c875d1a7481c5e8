//! SQLite adapters for task persistence.

mod models;
mod repository;

pub use repository::SqliteTaskRepository;
