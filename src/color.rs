//! Validated hex colour scalar shared by categories and priorities.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a colour value is not a `#RRGGBB` hex string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid color format (use #RRGGBB)")]
pub struct InvalidColorError(pub String);

/// Validated `#RRGGBB` colour value.
///
/// Accepts exactly one `#` followed by six hex digits, case-insensitive.
/// The digits are stored as given; no case normalisation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

/// Neutral grey applied when a priority is created without a colour.
pub const FALLBACK_COLOR: &str = "#808080";

impl HexColor {
    /// Creates a validated hex colour.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorError`] when the value is not a `#` followed by
    /// exactly six hex digits.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidColorError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let is_valid = chars.next() == Some('#')
            && trimmed.len() == 7
            && chars.all(|c| c.is_ascii_hexdigit());

        if !is_valid {
            return Err(InvalidColorError(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the colour as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    /// Returns the neutral grey fallback colour.
    fn default() -> Self {
        Self(FALLBACK_COLOR.to_owned())
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{HexColor, InvalidColorError};

    #[test]
    fn accepts_six_hex_digits() {
        let color = HexColor::new("#FF6B6B").expect("valid colour");
        assert_eq!(color.as_str(), "#FF6B6B");
    }

    #[test]
    fn accepts_lowercase_digits() {
        let color = HexColor::new("#ff6b6b").expect("valid colour");
        assert_eq!(color.as_str(), "#ff6b6b");
    }

    #[test]
    fn rejects_missing_hash() {
        assert_eq!(
            HexColor::new("FF6B6B"),
            Err(InvalidColorError("FF6B6B".to_owned()))
        );
    }

    #[test]
    fn rejects_short_value() {
        assert!(HexColor::new("#ff6b6").is_err());
    }

    #[test]
    fn rejects_long_value() {
        assert!(HexColor::new("#ff6b6b0").is_err());
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(HexColor::new("#GG0000").is_err());
    }

    #[test]
    fn rejects_empty_value() {
        assert!(HexColor::new("").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let color = HexColor::new("  #00AA11  ").expect("valid colour");
        assert_eq!(color.as_str(), "#00AA11");
    }

    #[test]
    fn default_is_neutral_grey() {
        assert_eq!(HexColor::default().as_str(), "#808080");
    }
}
