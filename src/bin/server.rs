//! Taskboard HTTP server.
//!
//! Wires configuration, storage, services, and the axum router together
//! and serves the API (plus the optional browser UI assets).

use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::category::adapters::sqlite::SqliteCategoryRepository;
use taskboard::category::services::CategoryService;
use taskboard::config::ServerConfig;
use taskboard::http::{self, AppState};
use taskboard::priority::adapters::sqlite::SqlitePriorityRepository;
use taskboard::priority::services::PriorityService;
use taskboard::storage;
use taskboard::task::adapters::sqlite::SqliteTaskRepository;
use taskboard::task::services::TaskService;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ServerConfig::from_env()?;

    let pool = storage::establish_pool(config.database_url())?;
    storage::initialize_schema(&pool)?;
    info!(database = config.database_url(), "storage ready");

    let state = AppState::new(
        CategoryService::new(Arc::new(SqliteCategoryRepository::new(pool.clone()))),
        PriorityService::new(Arc::new(SqlitePriorityRepository::new(pool.clone()))),
        TaskService::new(
            Arc::new(SqliteTaskRepository::new(pool)),
            Arc::new(DefaultClock),
        ),
    );

    let mut app = http::router(state);
    if let Some(static_dir) = config.static_dir() {
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
