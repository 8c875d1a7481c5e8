//! Service layer for category creation, update, and removal.

use crate::category::domain::{
    Category, CategoryDomainError, CategoryId, CategoryName, NewCategory,
};
use crate::category::ports::{CategoryRepository, CategoryRepositoryError};
use crate::color::HexColor;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for category operations.
#[derive(Debug, Error)]
pub enum CategoryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CategoryDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CategoryRepositoryError),
}

/// Result type for category service operations.
pub type CategoryServiceResult<T> = Result<T, CategoryServiceError>;

/// Category orchestration service.
#[derive(Clone)]
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    #[must_use]
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Returns all categories ordered by name ascending.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> CategoryServiceResult<Vec<Category>> {
        Ok(self.repository.list().await?)
    }

    /// Creates a new category from raw request values.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError`] when the name or colour is invalid
    /// or the name already exists.
    pub async fn create(&self, name: &str, color: &str) -> CategoryServiceResult<Category> {
        let name = CategoryName::new(name)?;
        let color = parse_color(color)?;
        Ok(self.repository.insert(NewCategory { name, color }).await?)
    }

    /// Overwrites name and colour of an existing category.
    ///
    /// The not-found check runs before field validation so that an unknown
    /// id yields a missing-record error even for a malformed payload.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError`] when the id is unknown, a value is
    /// invalid, or the name collides with another category.
    pub async fn update(
        &self,
        id: CategoryId,
        name: &str,
        color: &str,
    ) -> CategoryServiceResult<Category> {
        if !self.repository.exists(id).await? {
            return Err(CategoryRepositoryError::NotFound(id).into());
        }

        let name = CategoryName::new(name)?;
        let color = parse_color(color)?;
        Ok(self.repository.update(id, name, color).await?)
    }

    /// Removes a category that no task references.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryServiceError::Repository`] when the id is unknown
    /// or a task still references the category.
    pub async fn delete(&self, id: CategoryId) -> CategoryServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}

/// Parses a required colour field, distinguishing absent from malformed.
fn parse_color(raw: &str) -> Result<HexColor, CategoryDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CategoryDomainError::EmptyColor);
    }
    HexColor::new(trimmed).map_err(|_| CategoryDomainError::InvalidColor(trimmed.to_owned()))
}
