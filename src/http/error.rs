//! API error responses and service-error → status-code mapping.
//!
//! Every failure serializes to a single `{"error": "<message>"}` body.
//! Validation and conflict failures map to 400, missing records to 404,
//! and persistence failures to 500 with a generic per-operation message;
//! the underlying detail is logged, never exposed.

use crate::category::ports::CategoryRepositoryError;
use crate::category::services::CategoryServiceError;
use crate::priority::ports::PriorityRepositoryError;
use crate::priority::services::PriorityServiceError;
use crate::task::ports::TaskRepositoryError;
use crate::task::services::TaskServiceError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// An error response with a fixed status code and client-facing message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn internal(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.to_owned(),
        }
    }

    /// Maps a category service error, using `internal` as the 500 message.
    pub fn category(err: CategoryServiceError, internal: &str) -> Self {
        match err {
            CategoryServiceError::Domain(domain) => Self::bad_request(domain.to_string()),
            CategoryServiceError::Repository(repository) => match repository {
                CategoryRepositoryError::NotFound(_) => Self::not_found(repository.to_string()),
                CategoryRepositoryError::DuplicateName(_) | CategoryRepositoryError::InUse(_) => {
                    Self::bad_request(repository.to_string())
                }
                CategoryRepositoryError::Persistence(source) => {
                    tracing::error!(error = %source, "{internal}");
                    Self::internal(internal)
                }
            },
        }
    }

    /// Maps a priority service error, using `internal` as the 500 message.
    pub fn priority(err: PriorityServiceError, internal: &str) -> Self {
        match err {
            PriorityServiceError::Domain(domain) => Self::bad_request(domain.to_string()),
            PriorityServiceError::Repository(repository) => match repository {
                PriorityRepositoryError::NotFound(_) => Self::not_found(repository.to_string()),
                PriorityRepositoryError::DuplicateName(_) | PriorityRepositoryError::InUse(_) => {
                    Self::bad_request(repository.to_string())
                }
                PriorityRepositoryError::Persistence(source) => {
                    tracing::error!(error = %source, "{internal}");
                    Self::internal(internal)
                }
            },
        }
    }

    /// Maps a task service error, using `internal` as the 500 message.
    pub fn task(err: TaskServiceError, internal: &str) -> Self {
        match err {
            TaskServiceError::Domain(domain) => Self::bad_request(domain.to_string()),
            TaskServiceError::Repository(repository) => match repository {
                TaskRepositoryError::NotFound(_) => Self::not_found(repository.to_string()),
                TaskRepositoryError::MissingCategory(_)
                | TaskRepositoryError::MissingPriority(_) => {
                    Self::bad_request(repository.to_string())
                }
                TaskRepositoryError::Persistence(source) => {
                    tracing::error!(error = %source, "{internal}");
                    Self::internal(internal)
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
