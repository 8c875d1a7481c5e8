//! Diesel row models for task persistence.

use crate::storage::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Generated task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Lifecycle status string.
    pub status: String,
    /// Optional owning category.
    pub category_id: Option<i64>,
    /// Optional assigned priority.
    pub priority_id: Option<i64>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due timestamp.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest update timestamp, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Lifecycle status string.
    pub status: String,
    /// Owning category.
    pub category_id: Option<i64>,
    /// Optional assigned priority.
    pub priority_id: Option<i64>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due timestamp.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Partial-update changeset; outer `None` skips a column, inner `None`
/// writes NULL.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement status string.
    pub status: Option<String>,
    /// Replacement category reference.
    pub category_id: Option<Option<i64>>,
    /// Replacement priority reference.
    pub priority_id: Option<Option<i64>>,
    /// Replacement description.
    pub description: Option<Option<String>>,
    /// Replacement due timestamp.
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Update timestamp, always stamped.
    pub updated_at: Option<DateTime<Utc>>,
}
