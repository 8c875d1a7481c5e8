//! Priority endpoints.

use super::{ApiError, AppState, double_option};
use crate::priority::domain::PriorityId;
use crate::priority::services::{CreatePriorityRequest, UpdatePriorityRequest};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub struct CreatePriorityPayload {
    name: Option<String>,
    level: Option<i64>,
    color: Option<String>,
    description: Option<String>,
}

/// Partial-update payload. The nullable fields distinguish absent keys
/// from explicit nulls.
#[derive(Debug, Deserialize)]
pub struct UpdatePriorityPayload {
    name: Option<String>,
    level: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    color: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    description: Option<Option<String>>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let priorities = state
        .priorities
        .list()
        .await
        .map_err(|err| ApiError::priority(err, "Failed to fetch priorities"))?;
    Ok(Json(json!({ "priorities": priorities })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let priority = state
        .priorities
        .get(PriorityId::new(id))
        .await
        .map_err(|err| ApiError::priority(err, "Failed to fetch priority"))?;
    Ok(Json(json!({ "priority": priority })))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreatePriorityPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut request = CreatePriorityRequest::new();
    if let Some(name) = payload.name {
        request = request.with_name(name);
    }
    if let Some(level) = payload.level {
        request = request.with_level(level);
    }
    if let Some(color) = payload.color {
        request = request.with_color(color);
    }
    if let Some(description) = payload.description {
        request = request.with_description(description);
    }

    let priority = state
        .priorities
        .create(request)
        .await
        .map_err(|err| ApiError::priority(err, "Failed to create priority"))?;
    Ok((StatusCode::CREATED, Json(json!({ "priority": priority }))))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePriorityPayload>,
) -> Result<Json<Value>, ApiError> {
    let mut request = UpdatePriorityRequest::new();
    if let Some(name) = payload.name {
        request = request.with_name(name);
    }
    if let Some(level) = payload.level {
        request = request.with_level(level);
    }
    if let Some(color) = payload.color {
        request = request.with_color(color);
    }
    if let Some(description) = payload.description {
        request = request.with_description(description);
    }

    let priority = state
        .priorities
        .update(PriorityId::new(id), request)
        .await
        .map_err(|err| ApiError::priority(err, "Failed to update priority"))?;
    Ok(Json(json!({ "priority": priority })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state
        .priorities
        .delete(PriorityId::new(id))
        .await
        .map_err(|err| ApiError::priority(err, "Failed to delete priority"))?;
    Ok(Json(json!({ "success": true })))
}
