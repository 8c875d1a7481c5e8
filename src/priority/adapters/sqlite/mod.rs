//! SQLite adapters for priority persistence.

mod models;
mod repository;

pub use repository::SqlitePriorityRepository;
