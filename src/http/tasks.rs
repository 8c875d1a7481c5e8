//! Task endpoints.

use super::{ApiError, AppState, double_option};
use crate::category::domain::CategoryId;
use crate::task::domain::TaskId;
use crate::task::services::{CreateTaskRequest, UpdateTaskRequest};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    category_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskPayload {
    title: Option<String>,
    status: Option<String>,
    category_id: Option<i64>,
    priority_id: Option<i64>,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

/// Partial-update payload. The nullable fields distinguish absent keys
/// from explicit nulls.
///
/// Only an explicit null clears a reference: any numeric id must resolve
/// to an existing row, so `0` is rejected as an unknown id rather than
/// treated as a clear.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskPayload {
    title: Option<String>,
    status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    category_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    priority_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    due_date: Option<Option<DateTime<Utc>>>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Value>, ApiError> {
    let tasks = state
        .tasks
        .list(query.category_id.map(CategoryId::new))
        .await
        .map_err(|err| ApiError::task(err, "Failed to fetch tasks"))?;
    Ok(Json(json!({ "tasks": tasks })))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut request = CreateTaskRequest::new();
    if let Some(title) = payload.title {
        request = request.with_title(title);
    }
    if let Some(status) = payload.status {
        request = request.with_status(status);
    }
    if let Some(category_id) = payload.category_id {
        request = request.with_category(category_id);
    }
    if let Some(priority_id) = payload.priority_id {
        request = request.with_priority(priority_id);
    }
    if let Some(description) = payload.description {
        request = request.with_description(description);
    }
    if let Some(due_date) = payload.due_date {
        request = request.with_due_date(due_date);
    }

    let task = state
        .tasks
        .create(request)
        .await
        .map_err(|err| ApiError::task(err, "Failed to create task"))?;
    Ok((StatusCode::CREATED, Json(json!({ "task": task }))))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTaskPayload>,
) -> Result<Json<Value>, ApiError> {
    let mut request = UpdateTaskRequest::new();
    if let Some(title) = payload.title {
        request = request.with_title(title);
    }
    if let Some(status) = payload.status {
        request = request.with_status(status);
    }
    if let Some(category_id) = payload.category_id {
        request = request.with_category(category_id);
    }
    if let Some(priority_id) = payload.priority_id {
        request = request.with_priority(priority_id);
    }
    if let Some(description) = payload.description {
        request = request.with_description(description);
    }
    if let Some(due_date) = payload.due_date {
        request = request.with_due_date(due_date);
    }

    let task = state
        .tasks
        .update(TaskId::new(id), request)
        .await
        .map_err(|err| ApiError::task(err, "Failed to update task"))?;
    Ok(Json(json!({ "task": task })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state
        .tasks
        .delete(TaskId::new(id))
        .await
        .map_err(|err| ApiError::task(err, "Failed to delete task"))?;
    Ok(Json(json!({})))
}
