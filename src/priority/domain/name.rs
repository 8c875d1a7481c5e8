//! Validated priority name type.

use super::PriorityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, trimmed priority name.
///
/// Compared case-sensitively; uniqueness is enforced by the repositories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityName(String);

impl PriorityName {
    /// Creates a validated priority name.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityDomainError::EmptyName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PriorityDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(PriorityDomainError::EmptyName);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PriorityName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PriorityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
