//! Category endpoints.

use super::{ApiError, AppState};
use crate::category::domain::CategoryId;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

/// Create and update share one payload shape; both fields are required
/// and the service reports their absence.
#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    name: Option<String>,
    color: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let categories = state
        .categories
        .list()
        .await
        .map_err(|err| ApiError::category(err, "Failed to fetch categories"))?;
    Ok(Json(json!({ "categories": categories })))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let category = state
        .categories
        .create(
            payload.name.as_deref().unwrap_or_default(),
            payload.color.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(|err| ApiError::category(err, "Failed to create category"))?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": category.id().value() })),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryPayload>,
) -> Result<Json<Value>, ApiError> {
    state
        .categories
        .update(
            CategoryId::new(id),
            payload.name.as_deref().unwrap_or_default(),
            payload.color.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(|err| ApiError::category(err, "Failed to update category"))?;
    Ok(Json(json!({})))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state
        .categories
        .delete(CategoryId::new(id))
        .await
        .map_err(|err| ApiError::category(err, "Failed to delete category"))?;
    Ok(Json(json!({})))
}
