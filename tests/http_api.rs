//! End-to-end HTTP tests: requests through the full router against the
//! in-memory store, asserting status codes and JSON envelopes.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use serde_json::{Value, json};
use std::sync::Arc;
use taskboard::category::adapters::memory::InMemoryCategoryRepository;
use taskboard::category::services::CategoryService;
use taskboard::http::{self, AppState};
use taskboard::priority::adapters::memory::InMemoryPriorityRepository;
use taskboard::priority::services::PriorityService;
use taskboard::storage::InMemoryStore;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::services::TaskService;
use tower::ServiceExt;

fn app() -> Router {
    let store = InMemoryStore::new();
    http::router(AppState::new(
        CategoryService::new(Arc::new(InMemoryCategoryRepository::new(store.clone()))),
        PriorityService::new(Arc::new(InMemoryPriorityRepository::new(store.clone()))),
        TaskService::new(
            Arc::new(InMemoryTaskRepository::new(store)),
            Arc::new(DefaultClock),
        ),
    ))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn category_crud_round_trip() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Work", "color": "#FF6B6B"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().expect("created id");

    let (status, body) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"][0]["name"], "Work");
    assert_eq!(body["categories"][0]["color"], "#FF6B6B");

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/categories/{id}"),
        Some(json!({"name": "Deep Work", "color": "#4ECDC4"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, body) = send(&app, "DELETE", &format!("/api/categories/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (_, body) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(body["categories"], json!([]));
}

#[tokio::test]
async fn category_create_validates_payload() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"color": "#FF6B6B"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Category name is required");

    let (status, body) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Work", "color": "red"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid color format (use #RRGGBB)");
}

#[tokio::test]
async fn duplicate_category_name_conflicts() {
    let app = app();
    let payload = json!({"name": "Work", "color": "#FF6B6B"});

    send(&app, "POST", "/api/categories", Some(payload.clone())).await;
    let (status, body) = send(&app, "POST", "/api/categories", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Category name already exists");
}

#[tokio::test]
async fn unknown_category_returns_not_found() {
    let app = app();

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/categories/999",
        Some(json!({"name": "X", "color": "#FF6B6B"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Category not found");
}

#[tokio::test]
async fn priority_crud_round_trip() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/priorities",
        Some(json!({"name": "Urgent", "level": 1, "description": "Drop everything"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["priority"]["name"], "Urgent");
    // Colour falls back to neutral grey when omitted.
    assert_eq!(body["priority"]["color"], "#808080");
    let id = body["priority"]["id"].as_i64().expect("id");

    let (status, body) = send(&app, "GET", &format!("/api/priorities/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["priority"]["description"], "Drop everything");

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/priorities/{id}"),
        Some(json!({"level": 2, "description": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["priority"]["level"], 2);
    assert_eq!(body["priority"]["description"], Value::Null);

    let (status, body) = send(&app, "DELETE", &format!("/api/priorities/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
async fn priority_create_requires_name_and_level() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/priorities",
        Some(json!({"name": "Urgent"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name and level are required");
}

#[tokio::test]
async fn priority_empty_patch_is_rejected() {
    let app = app();
    let (_, created) = send(
        &app,
        "POST",
        "/api/priorities",
        Some(json!({"name": "Urgent", "level": 1})),
    )
    .await;
    let id = created["priority"]["id"].as_i64().expect("id");

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/priorities/{id}"),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No fields to update");
}

#[tokio::test]
async fn task_crud_round_trip_with_enrichment() {
    let app = app();

    let (_, category) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Work", "color": "#FF6B6B"})),
    )
    .await;
    let category_id = category["id"].as_i64().expect("category id");
    let (_, priority) = send(
        &app,
        "POST",
        "/api/priorities",
        Some(json!({"name": "Urgent", "level": 1, "color": "#E74C3C"})),
    )
    .await;
    let priority_id = priority["priority"]["id"].as_i64().expect("priority id");

    let (status, body) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({
            "title": "Ship release",
            "category_id": category_id,
            "priority_id": priority_id,
            "description": "  final pass  "
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let task = &body["task"];
    assert_eq!(task["status"], "pending");
    assert_eq!(task["description"], "final pass");
    assert_eq!(task["category_name"], "Work");
    assert_eq!(task["category_color"], "#FF6B6B");
    assert_eq!(task["priority_name"], "Urgent");
    assert_eq!(task["priority_color"], "#E74C3C");
    assert_eq!(task["updated_at"], Value::Null);
    let id = task["id"].as_i64().expect("task id");

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/tasks/{id}"),
        Some(json!({"status": "completed", "priority_id": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["status"], "completed");
    assert_eq!(body["task"]["priority_id"], Value::Null);
    assert_eq!(body["task"]["priority_name"], Value::Null);
    assert_ne!(body["task"]["updated_at"], Value::Null);

    let (status, body) = send(&app, "DELETE", &format!("/api/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (_, body) = send(&app, "GET", "/api/tasks", None).await;
    assert_eq!(body["tasks"], json!([]));
}

#[tokio::test]
async fn task_create_validates_payload() {
    let app = app();
    let (_, category) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Work", "color": "#FF6B6B"})),
    )
    .await;
    let category_id = category["id"].as_i64().expect("category id");

    let (status, body) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"category_id": category_id})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Task title is required");

    let (status, body) = send(&app, "POST", "/api/tasks", Some(json!({"title": "X"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing category id");

    let (status, body) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"title": "X", "category_id": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid category id");

    let (status, body) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"title": "X", "category_id": category_id, "status": "done"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid status");
}

#[tokio::test]
async fn task_list_filters_by_category() {
    let app = app();
    let (_, work) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Work", "color": "#FF6B6B"})),
    )
    .await;
    let (_, errands) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Errands", "color": "#4ECDC4"})),
    )
    .await;
    let work_id = work["id"].as_i64().expect("work id");
    let errands_id = errands["id"].as_i64().expect("errands id");

    for (title, category) in [("First", work_id), ("Second", errands_id), ("Third", work_id)] {
        send(
            &app,
            "POST",
            "/api/tasks",
            Some(json!({"title": title, "category_id": category})),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", &format!("/api/tasks?category_id={work_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["tasks"]
        .as_array()
        .expect("array")
        .iter()
        .map(|t| t["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles, vec!["Third", "First"]);

    let (status, body) = send(&app, "GET", "/api/tasks?category_id=999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tasks"], json!([]));
}

#[tokio::test]
async fn task_due_date_round_trips_and_null_clears_it() {
    let app = app();
    let (_, category) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Work", "color": "#FF6B6B"})),
    )
    .await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({
            "title": "Ship release",
            "category_id": category["id"],
            "due_date": "2026-09-01T12:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["task"]["due_date"], "2026-09-01T12:00:00Z");
    let id = body["task"]["id"].as_i64().expect("task id");

    // An absent key leaves the stored value untouched.
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/tasks/{id}"),
        Some(json!({"status": "in_progress"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["due_date"], "2026-09-01T12:00:00Z");

    // An explicit null clears it.
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/tasks/{id}"),
        Some(json!({"due_date": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["due_date"], Value::Null);
}

#[tokio::test]
async fn empty_task_patch_is_rejected() {
    let app = app();
    let (_, category) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Work", "color": "#FF6B6B"})),
    )
    .await;
    let (_, created) = send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({"title": "X", "category_id": category["id"]})),
    )
    .await;
    let id = created["task"]["id"].as_i64().expect("task id");

    let (status, body) = send(&app, "PATCH", &format!("/api/tasks/{id}"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No fields to update");
}

#[tokio::test]
async fn referenced_category_and_priority_cannot_be_deleted() {
    let app = app();
    let (_, category) = send(
        &app,
        "POST",
        "/api/categories",
        Some(json!({"name": "Work", "color": "#FF6B6B"})),
    )
    .await;
    let (_, priority) = send(
        &app,
        "POST",
        "/api/priorities",
        Some(json!({"name": "Urgent", "level": 1})),
    )
    .await;
    let category_id = category["id"].as_i64().expect("category id");
    let priority_id = priority["priority"]["id"].as_i64().expect("priority id");
    send(
        &app,
        "POST",
        "/api/tasks",
        Some(json!({
            "title": "Ship release",
            "category_id": category_id,
            "priority_id": priority_id
        })),
    )
    .await;

    let (status, body) = send(&app, "DELETE", &format!("/api/categories/{category_id}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Cannot delete category that is being used by tasks. Reassign tasks first."
    );

    let (status, body) = send(&app, "DELETE", &format!("/api/priorities/{priority_id}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Cannot delete priority because it is used by tasks"
    );
}
