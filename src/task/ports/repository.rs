//! Repository port for task persistence, enrichment, and FK validation.

use crate::category::domain::CategoryId;
use crate::priority::domain::PriorityId;
use crate::task::domain::{NewTask, TaskChanges, TaskId, TaskView};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations validate foreign-key references inside the same atomic
/// unit as the mutation, and return rows enriched with the linked category
/// and priority name/colour.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns tasks ordered by id descending, optionally restricted to one
    /// category.
    ///
    /// A filter id with no matching tasks yields an empty list.
    async fn list(&self, category: Option<CategoryId>) -> TaskRepositoryResult<Vec<TaskView>>;

    /// Reports whether a task with the given id exists.
    async fn exists(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Inserts a new task and returns the enriched row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::MissingCategory`] or
    /// [`TaskRepositoryError::MissingPriority`] when a reference does not
    /// resolve.
    async fn insert(&self, new: NewTask) -> TaskRepositoryResult<TaskView>;

    /// Applies partial changes to an existing task and stamps `updated_at`.
    ///
    /// Callers guarantee at least one field is present.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the id is unknown, or
    /// a missing-reference error when a newly set FK does not resolve.
    async fn update(
        &self,
        id: TaskId,
        changes: TaskChanges,
        updated_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<TaskView>;

    /// Removes a task. Never cascades.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the id is unknown.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No task exists with the given id.
    #[error("Task not found")]
    NotFound(TaskId),

    /// The referenced category does not exist.
    #[error("Invalid category id")]
    MissingCategory(CategoryId),

    /// The referenced priority does not exist.
    #[error("Invalid priority id")]
    MissingPriority(PriorityId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
