//! Error types for task domain validation and parsing.
//!
//! Display strings double as the API-facing error messages.

use thiserror::Error;

/// Errors returned while constructing task domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// Creation payload lacks a title, or the title is empty after trimming.
    #[error("Task title is required")]
    MissingTitle,

    /// An updated title is empty after trimming.
    #[error("Task title cannot be empty")]
    EmptyTitle,

    /// The task title exceeds the 100-character storage limit.
    #[error("Task title must be at most 100 characters")]
    TitleTooLong(String),

    /// Creation payload lacks a category reference.
    #[error("Missing category id")]
    MissingCategory,

    /// The status value is outside the three-state enum.
    #[error("Invalid status")]
    InvalidStatus(String),

    /// An update payload carried no recognised field.
    #[error("No fields to update")]
    EmptyUpdate,
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
