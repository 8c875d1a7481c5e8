//! Diesel row models for category persistence.

use crate::storage::schema::categories;
use diesel::prelude::*;

/// Query result row for category records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryRow {
    /// Generated category identifier.
    pub id: i64,
    /// Unique category name.
    pub name: String,
    /// `#RRGGBB` display colour.
    pub color: String,
}

/// Insert model for category records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategoryRow {
    /// Unique category name.
    pub name: String,
    /// `#RRGGBB` display colour.
    pub color: String,
}
