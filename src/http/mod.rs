//! HTTP boundary for the task-tracking API.
//!
//! A thin axum layer: handlers deserialize request payloads, call the
//! services held in [`AppState`], and serialize results into the JSON
//! envelopes the browser client expects. All status-code decisions live
//! in [`error`].

mod categories;
mod error;
mod priorities;
mod state;
mod tasks;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use axum::routing::get;
use serde::{Deserialize, Deserializer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the API router with CORS and request tracing layers applied.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(categories::list).post(categories::create),
        )
        .route(
            "/api/categories/{id}",
            axum::routing::patch(categories::update).delete(categories::remove),
        )
        .route(
            "/api/priorities",
            get(priorities::list).post(priorities::create),
        )
        .route(
            "/api/priorities/{id}",
            get(priorities::get)
                .patch(priorities::update)
                .delete(priorities::remove),
        )
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/api/tasks/{id}",
            axum::routing::patch(tasks::update).delete(tasks::remove),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Deserializes a field so that an absent key stays `None` while an
/// explicit JSON null becomes `Some(None)`.
///
/// Combine with `#[serde(default)]` on the field.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}
