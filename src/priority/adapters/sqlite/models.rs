//! Diesel row models for priority persistence.

use crate::storage::schema::priorities;
use diesel::prelude::*;

/// Query result row for priority records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = priorities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PriorityRow {
    /// Generated priority identifier.
    pub id: i64,
    /// Unique priority name.
    pub name: String,
    /// Ascending sort key.
    pub level: i64,
    /// `#RRGGBB` display colour.
    pub color: String,
    /// Optional free-form description.
    pub description: Option<String>,
}

/// Insert model for priority records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = priorities)]
pub struct NewPriorityRow {
    /// Unique priority name.
    pub name: String,
    /// Ascending sort key.
    pub level: i64,
    /// `#RRGGBB` display colour.
    pub color: String,
    /// Optional free-form description.
    pub description: Option<String>,
}

/// Partial-update changeset; `None` skips a column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = priorities)]
pub struct PriorityChangeset {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement level.
    pub level: Option<i64>,
    /// Replacement colour.
    pub color: Option<String>,
    /// Replacement description; `Some(None)` writes NULL.
    pub description: Option<Option<String>>,
}
