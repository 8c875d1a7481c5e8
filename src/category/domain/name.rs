//! Validated category name type.

use super::CategoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a category name.
const MAX_NAME_LENGTH: usize = 50;

/// Validated, trimmed category name.
///
/// Names are compared case-sensitively; uniqueness across categories is
/// enforced by the repositories, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a validated category name.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryDomainError::EmptyName`] when the value is empty
    /// after trimming, or [`CategoryDomainError::NameTooLong`] when it
    /// exceeds 50 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, CategoryDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(CategoryDomainError::EmptyName);
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(CategoryDomainError::NameTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
