//! Priority aggregate, creation payload, and partial-update changes.

use super::{PriorityId, PriorityName};
use crate::color::HexColor;
use serde::Serialize;

/// Priority record with a storage-generated identifier.
///
/// `level` is a pure ascending sort key: lower levels list first, and
/// levels are not unique. Listing breaks level ties by id ascending so the
/// ordering stays stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Priority {
    id: PriorityId,
    name: PriorityName,
    level: i64,
    color: HexColor,
    description: Option<String>,
}

impl Priority {
    /// Assembles a priority from persisted values.
    #[must_use]
    pub const fn new(
        id: PriorityId,
        name: PriorityName,
        level: i64,
        color: HexColor,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            level,
            color,
            description,
        }
    }

    /// Returns the priority identifier.
    #[must_use]
    pub const fn id(&self) -> PriorityId {
        self.id
    }

    /// Returns the priority name.
    #[must_use]
    pub const fn name(&self) -> &PriorityName {
        &self.name
    }

    /// Returns the ascending sort key.
    #[must_use]
    pub const fn level(&self) -> i64 {
        self.level
    }

    /// Returns the display colour.
    #[must_use]
    pub const fn color(&self) -> &HexColor {
        &self.color
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Applies validated partial changes, used by the in-memory adapter.
    pub fn apply_changes(&mut self, changes: &PriorityChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(level) = changes.level {
            self.level = level;
        }
        if let Some(color) = &changes.color {
            self.color = color.clone();
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
    }
}

/// Validated payload for inserting a new priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPriority {
    /// Unique priority name.
    pub name: PriorityName,
    /// Ascending sort key.
    pub level: i64,
    /// Display colour; defaults to neutral grey when the client omits it.
    pub color: HexColor,
    /// Optional free-form description.
    pub description: Option<String>,
}

/// Validated partial update for a priority.
///
/// `None` leaves a field untouched; for `description`, `Some(None)` clears
/// the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityChanges {
    /// Replacement name, if provided.
    pub name: Option<PriorityName>,
    /// Replacement level, if provided.
    pub level: Option<i64>,
    /// Replacement colour, if provided.
    pub color: Option<HexColor>,
    /// Replacement description; `Some(None)` clears it.
    pub description: Option<Option<String>>,
}

impl PriorityChanges {
    /// Reports whether no field was provided.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.level.is_none()
            && self.color.is_none()
            && self.description.is_none()
    }
}
