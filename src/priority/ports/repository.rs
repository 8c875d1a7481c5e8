//! Repository port for priority persistence and integrity checks.

use crate::priority::domain::{NewPriority, Priority, PriorityChanges, PriorityId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for priority repository operations.
pub type PriorityRepositoryResult<T> = Result<T, PriorityRepositoryError>;

/// Priority persistence contract.
///
/// Implementations run each check-then-act sequence as one atomic unit.
#[async_trait]
pub trait PriorityRepository: Send + Sync {
    /// Returns all priorities ordered by level ascending, id ascending on
    /// ties.
    async fn list(&self) -> PriorityRepositoryResult<Vec<Priority>>;

    /// Finds a priority by id; `None` when absent.
    async fn find_by_id(&self, id: PriorityId) -> PriorityRepositoryResult<Option<Priority>>;

    /// Reports whether a priority with the given id exists.
    async fn exists(&self, id: PriorityId) -> PriorityRepositoryResult<bool>;

    /// Inserts a new priority and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityRepositoryError::DuplicateName`] when another
    /// priority already carries the name.
    async fn insert(&self, new: NewPriority) -> PriorityRepositoryResult<Priority>;

    /// Applies partial changes to an existing priority.
    ///
    /// The uniqueness check excludes the row's own id. Callers guarantee at
    /// least one field is present.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityRepositoryError::NotFound`] when the id is unknown
    /// or [`PriorityRepositoryError::DuplicateName`] on a name collision.
    async fn update(
        &self,
        id: PriorityId,
        changes: PriorityChanges,
    ) -> PriorityRepositoryResult<Priority>;

    /// Removes a priority.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityRepositoryError::NotFound`] when the id is unknown
    /// or [`PriorityRepositoryError::InUse`] while any task references it.
    async fn delete(&self, id: PriorityId) -> PriorityRepositoryResult<()>;
}

/// Errors returned by priority repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PriorityRepositoryError {
    /// Another priority already carries this name.
    #[error("Priority name already exists")]
    DuplicateName(String),

    /// No priority exists with the given id.
    #[error("Priority not found")]
    NotFound(PriorityId),

    /// At least one task still references the priority.
    #[error("Cannot delete priority because it is used by tasks")]
    InUse(PriorityId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PriorityRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
