//! Category aggregate and creation payload.

use super::{CategoryId, CategoryName};
use crate::color::HexColor;
use serde::Serialize;

/// Category record with a storage-generated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
    color: HexColor,
}

impl Category {
    /// Assembles a category from persisted values.
    #[must_use]
    pub const fn new(id: CategoryId, name: CategoryName, color: HexColor) -> Self {
        Self { id, name, color }
    }

    /// Returns the category identifier.
    #[must_use]
    pub const fn id(&self) -> CategoryId {
        self.id
    }

    /// Returns the category name.
    #[must_use]
    pub const fn name(&self) -> &CategoryName {
        &self.name
    }

    /// Returns the display colour.
    #[must_use]
    pub const fn color(&self) -> &HexColor {
        &self.color
    }
}

/// Validated payload for inserting a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Unique category name.
    pub name: CategoryName,
    /// Display colour.
    pub color: HexColor,
}
