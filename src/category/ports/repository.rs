//! Repository port for category persistence and integrity checks.

use crate::category::domain::{Category, CategoryId, CategoryName, NewCategory};
use crate::color::HexColor;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for category repository operations.
pub type CategoryRepositoryResult<T> = Result<T, CategoryRepositoryError>;

/// Category persistence contract.
///
/// Implementations run each check-then-act sequence (uniqueness probe,
/// reference count, mutation) as one atomic unit.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Returns all categories ordered by name ascending.
    async fn list(&self) -> CategoryRepositoryResult<Vec<Category>>;

    /// Reports whether a category with the given id exists.
    async fn exists(&self, id: CategoryId) -> CategoryRepositoryResult<bool>;

    /// Inserts a new category and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::DuplicateName`] when another
    /// category already carries the name.
    async fn insert(&self, new: NewCategory) -> CategoryRepositoryResult<Category>;

    /// Overwrites name and colour of an existing category.
    ///
    /// The uniqueness check excludes the row's own id.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the id is unknown
    /// or [`CategoryRepositoryError::DuplicateName`] on a name collision.
    async fn update(
        &self,
        id: CategoryId,
        name: CategoryName,
        color: HexColor,
    ) -> CategoryRepositoryResult<Category>;

    /// Removes a category.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRepositoryError::NotFound`] when the id is unknown
    /// or [`CategoryRepositoryError::InUse`] while any task references it.
    async fn delete(&self, id: CategoryId) -> CategoryRepositoryResult<()>;
}

/// Errors returned by category repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CategoryRepositoryError {
    /// Another category already carries this name.
    #[error("Category name already exists")]
    DuplicateName(String),

    /// No category exists with the given id.
    #[error("Category not found")]
    NotFound(CategoryId),

    /// At least one task still references the category.
    #[error("Cannot delete category that is being used by tasks. Reassign tasks first.")]
    InUse(CategoryId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CategoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
