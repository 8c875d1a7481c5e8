//! Service layer for priority creation, update, and removal.

use crate::color::HexColor;
use crate::priority::domain::{
    NewPriority, Priority, PriorityChanges, PriorityDomainError, PriorityId, PriorityName,
};
use crate::priority::ports::{PriorityRepository, PriorityRepositoryError};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a priority.
///
/// All fields are optional at construction time; the service validates
/// presence so that missing-field errors surface uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePriorityRequest {
    name: Option<String>,
    level: Option<i64>,
    color: Option<String>,
    description: Option<String>,
}

impl CreatePriorityRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the priority name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the sort level.
    #[must_use]
    pub const fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial-update request for a priority.
///
/// Absent fields keep their stored value. A provided-but-null colour
/// resets to the default grey; a provided-but-null description clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePriorityRequest {
    name: Option<String>,
    level: Option<i64>,
    color: Option<Option<String>>,
    description: Option<Option<String>>,
}

impl UpdatePriorityRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a replacement level.
    #[must_use]
    pub const fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets a replacement colour; `None` resets to the default grey.
    #[must_use]
    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets a replacement description; `None` clears it.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    /// Reports whether no field was provided.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.level.is_none()
            && self.color.is_none()
            && self.description.is_none()
    }
}

/// Service-level errors for priority operations.
#[derive(Debug, Error)]
pub enum PriorityServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] PriorityDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] PriorityRepositoryError),
}

/// Result type for priority service operations.
pub type PriorityServiceResult<T> = Result<T, PriorityServiceError>;

/// Priority orchestration service.
#[derive(Clone)]
pub struct PriorityService {
    repository: Arc<dyn PriorityRepository>,
}

impl PriorityService {
    /// Creates a new priority service.
    #[must_use]
    pub fn new(repository: Arc<dyn PriorityRepository>) -> Self {
        Self { repository }
    }

    /// Returns all priorities ordered by level ascending.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> PriorityServiceResult<Vec<Priority>> {
        Ok(self.repository.list().await?)
    }

    /// Fetches a single priority.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityRepositoryError::NotFound`] when the id is unknown.
    pub async fn get(&self, id: PriorityId) -> PriorityServiceResult<Priority> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| PriorityRepositoryError::NotFound(id).into())
    }

    /// Creates a new priority.
    ///
    /// The colour falls back to the default grey when absent or empty, and
    /// an empty description is stored as null.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityServiceError`] when name or level is missing, a
    /// value is invalid, or the name already exists.
    pub async fn create(&self, request: CreatePriorityRequest) -> PriorityServiceResult<Priority> {
        let (Some(name), Some(level)) = (request.name, request.level) else {
            return Err(PriorityDomainError::MissingNameOrLevel.into());
        };

        let name = PriorityName::new(name)?;
        let color = parse_color_or_default(request.color.as_deref())?;
        let description = request.description.as_deref().and_then(normalize_text);

        Ok(self
            .repository
            .insert(NewPriority {
                name,
                level,
                color,
                description,
            })
            .await?)
    }

    /// Applies a partial update to an existing priority.
    ///
    /// The not-found check runs before field validation.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityServiceError`] when the id is unknown, no field is
    /// provided, a value is invalid, or the name collides.
    pub async fn update(
        &self,
        id: PriorityId,
        request: UpdatePriorityRequest,
    ) -> PriorityServiceResult<Priority> {
        if !self.repository.exists(id).await? {
            return Err(PriorityRepositoryError::NotFound(id).into());
        }

        if request.is_empty() {
            return Err(PriorityDomainError::EmptyUpdate.into());
        }

        let name = request.name.map(PriorityName::new).transpose()?;
        let color = request
            .color
            .map(|color| parse_color_or_default(color.as_deref()))
            .transpose()?;
        let description = request
            .description
            .map(|description| description.as_deref().and_then(normalize_text));

        let changes = PriorityChanges {
            name,
            level: request.level,
            color,
            description,
        };

        Ok(self.repository.update(id, changes).await?)
    }

    /// Removes a priority that no task references.
    ///
    /// # Errors
    ///
    /// Returns [`PriorityServiceError::Repository`] when the id is unknown
    /// or a task still references the priority.
    pub async fn delete(&self, id: PriorityId) -> PriorityServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }
}

/// Parses an optional colour, falling back to the default grey for absent
/// or empty values.
fn parse_color_or_default(raw: Option<&str>) -> Result<HexColor, PriorityDomainError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(HexColor::default()),
        Some(value) => {
            HexColor::new(value).map_err(|_| PriorityDomainError::InvalidColor(value.to_owned()))
        }
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
