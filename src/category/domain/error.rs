//! Error types for category domain validation.
//!
//! Display strings double as the API-facing error messages, so they are
//! phrased for end users rather than for logs.

use thiserror::Error;

/// Errors returned while constructing category domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryDomainError {
    /// The category name is empty after trimming.
    #[error("Category name is required")]
    EmptyName,

    /// The category name exceeds the 50-character storage limit.
    #[error("Category name must be at most 50 characters")]
    NameTooLong(String),

    /// The category colour is empty after trimming.
    #[error("Category color is required")]
    EmptyColor,

    /// The category colour is not a `#RRGGBB` hex string.
    #[error("Invalid color format (use #RRGGBB)")]
    InvalidColor(String),
}
