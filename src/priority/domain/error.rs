//! Error types for priority domain validation.
//!
//! Display strings double as the API-facing error messages.

use thiserror::Error;

/// Errors returned while constructing priority domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriorityDomainError {
    /// Creation payload lacks a name or a level.
    #[error("Name and level are required")]
    MissingNameOrLevel,

    /// The priority name is empty after trimming.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The priority colour is not a `#RRGGBB` hex string.
    #[error("Invalid color format (use #RRGGBB)")]
    InvalidColor(String),

    /// An update payload carried no recognised field.
    #[error("No fields to update")]
    EmptyUpdate,
}
