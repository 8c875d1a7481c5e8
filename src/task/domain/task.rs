//! Task aggregate, creation payload, partial-update changes, and the
//! enriched read-time view.

use super::{TaskId, TaskStatus, TaskTitle};
use crate::category::domain::CategoryId;
use crate::priority::domain::PriorityId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Task record with a storage-generated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    status: TaskStatus,
    category_id: Option<CategoryId>,
    priority_id: Option<PriorityId>,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted category reference, if any.
    pub category_id: Option<CategoryId>,
    /// Persisted priority reference, if any.
    pub priority_id: Option<PriorityId>,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due timestamp, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            status: data.status,
            category_id: data.category_id,
            priority_id: data.priority_id,
            description: data.description,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the category reference, if any.
    #[must_use]
    pub const fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    /// Returns the priority reference, if any.
    #[must_use]
    pub const fn priority_id(&self) -> Option<PriorityId> {
        self.priority_id
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the optional due timestamp.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Applies validated partial changes and stamps the update timestamp.
    ///
    /// Used by the in-memory adapter; the SQLite adapter applies the same
    /// changes as a Diesel changeset.
    pub fn apply_changes(&mut self, changes: &TaskChanges, updated_at: DateTime<Utc>) {
        if let Some(title) = &changes.title {
            self.title = title.clone();
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(category_id) = changes.category_id {
            self.category_id = category_id;
        }
        if let Some(priority_id) = changes.priority_id {
            self.priority_id = priority_id;
        }
        if let Some(description) = &changes.description {
            self.description = description.clone();
        }
        if let Some(due_date) = changes.due_date {
            self.due_date = due_date;
        }
        self.updated_at = Some(updated_at);
    }
}

/// Validated payload for inserting a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: TaskTitle,
    /// Initial lifecycle status.
    pub status: TaskStatus,
    /// Owning category; required at creation time.
    pub category_id: CategoryId,
    /// Optional assigned priority.
    pub priority_id: Option<PriorityId>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due timestamp.
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp stamped by the service clock.
    pub created_at: DateTime<Utc>,
}

/// Validated partial update for a task.
///
/// Outer `None` leaves a field untouched; for the nullable fields, an
/// inner `None` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title, if provided.
    pub title: Option<TaskTitle>,
    /// Replacement status, if provided.
    pub status: Option<TaskStatus>,
    /// Replacement category reference; `Some(None)` clears it.
    pub category_id: Option<Option<CategoryId>>,
    /// Replacement priority reference; `Some(None)` clears it.
    pub priority_id: Option<Option<PriorityId>>,
    /// Replacement description; `Some(None)` clears it.
    pub description: Option<Option<String>>,
    /// Replacement due timestamp; `Some(None)` clears it.
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskChanges {
    /// Reports whether no field was provided.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.status.is_none()
            && self.category_id.is_none()
            && self.priority_id.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
    }
}

/// Read-time projection of a task enriched with the denormalised name and
/// colour of its linked category and priority.
///
/// The enrichment is computed per query and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// The underlying task record.
    #[serde(flatten)]
    pub task: Task,
    /// Name of the linked category, if any.
    pub category_name: Option<String>,
    /// Colour of the linked category, if any.
    pub category_color: Option<String>,
    /// Name of the linked priority, if any.
    pub priority_name: Option<String>,
    /// Colour of the linked priority, if any.
    pub priority_color: Option<String>,
}
