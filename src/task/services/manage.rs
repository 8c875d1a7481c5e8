//! Service layer for task creation, update, and removal.
//!
//! Timestamps come from the injected clock so tests can pin time.

use crate::category::domain::CategoryId;
use crate::priority::domain::PriorityId;
use crate::task::domain::{
    NewTask, TaskChanges, TaskDomainError, TaskId, TaskStatus, TaskTitle, TaskView,
};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Only the title and category are required; the service reports their
/// absence rather than the constructor, so that missing-field errors
/// surface uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: Option<String>,
    status: Option<String>,
    category_id: Option<i64>,
    priority_id: Option<i64>,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the task title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the initial status string.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the owning category.
    #[must_use]
    pub const fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets the assigned priority.
    #[must_use]
    pub const fn with_priority(mut self, priority_id: i64) -> Self {
        self.priority_id = Some(priority_id);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Partial-update request for a task.
///
/// Absent fields keep their stored value; for the nullable fields a
/// provided-but-null value clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    status: Option<String>,
    category_id: Option<Option<i64>>,
    priority_id: Option<Option<i64>>,
    description: Option<Option<String>>,
    due_date: Option<Option<DateTime<Utc>>>,
}

impl UpdateTaskRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement status string.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets a replacement category reference; `None` clears it.
    #[must_use]
    pub const fn with_category(mut self, category_id: Option<i64>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets a replacement priority reference; `None` clears it.
    #[must_use]
    pub const fn with_priority(mut self, priority_id: Option<i64>) -> Self {
        self.priority_id = Some(priority_id);
        self
    }

    /// Sets a replacement description; `None` clears it.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets a replacement due timestamp; `None` clears it.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

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

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService {
    repository: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TaskService {
    /// Creates a new task service.
    #[must_use]
    pub fn new(repository: Arc<dyn TaskRepository>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { repository, clock }
    }

    /// Returns enriched tasks ordered newest-first, optionally filtered by
    /// category.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, category: Option<CategoryId>) -> TaskServiceResult<Vec<TaskView>> {
        Ok(self.repository.list(category).await?)
    }

    /// Creates a new task.
    ///
    /// The status defaults to pending when absent; the category is
    /// mandatory and must resolve to an existing row.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the title or category is missing,
    /// the status string is unknown, or a reference does not resolve.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<TaskView> {
        let title = request
            .title
            .ok_or(TaskDomainError::MissingTitle)
            .and_then(|title| {
                TaskTitle::new(title).map_err(|err| match err {
                    TaskDomainError::EmptyTitle => TaskDomainError::MissingTitle,
                    other => other,
                })
            })?;

        let status = parse_status(request.status.as_deref())?;
        let category_id = request
            .category_id
            .map(CategoryId::new)
            .ok_or(TaskDomainError::MissingCategory)?;
        let description = request.description.as_deref().and_then(normalize_text);

        Ok(self
            .repository
            .insert(NewTask {
                title,
                status,
                category_id,
                priority_id: request.priority_id.map(PriorityId::new),
                description,
                due_date: request.due_date,
                created_at: self.clock.utc(),
            })
            .await?)
    }

    /// Applies a partial update to an existing task.
    ///
    /// The not-found check runs before field validation, and `updated_at`
    /// is stamped from the service clock.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the id is unknown, no field is
    /// provided, a value is invalid, or a newly set reference does not
    /// resolve.
    pub async fn update(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<TaskView> {
        if !self.repository.exists(id).await? {
            return Err(TaskRepositoryError::NotFound(id).into());
        }

        if request.is_empty() {
            return Err(TaskDomainError::EmptyUpdate.into());
        }

        let title = request.title.map(TaskTitle::new).transpose()?;
        let status = request
            .status
            .map(|status| parse_status(Some(&status)))
            .transpose()?;
        let description = request
            .description
            .map(|description| description.as_deref().and_then(normalize_text));

        let changes = TaskChanges {
            title,
            status,
            category_id: request
                .category_id
                .map(|category| category.map(CategoryId::new)),
            priority_id: request
                .priority_id
                .map(|priority| priority.map(PriorityId::new)),
            description,
            due_date: request.due_date,
        };

        Ok(self
            .repository
            .update(id, changes, self.clock.utc())
            .await?)
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the id is unknown.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}

/// Parses an optional status string, defaulting to pending when absent.
fn parse_status(raw: Option<&str>) -> Result<TaskStatus, TaskDomainError> {
    match raw {
        None => Ok(TaskStatus::default()),
        Some(value) => TaskStatus::try_from(value)
            .map_err(|_| TaskDomainError::InvalidStatus(value.to_owned())),
    }
}

/// Trims free-form text, mapping empty results to null.
fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
