//! Shared storage substrate: SQLite schema, pooling, and the in-memory store.
//!
//! The three entity tables live in one Diesel schema so that task queries can
//! join categories and priorities at read time. Entity modules provide their
//! own adapters on top of the pool (or the in-memory store in tests).

pub mod memory;
pub mod schema;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};
use diesel::sqlite::SqliteConnection;
use thiserror::Error;

pub use memory::InMemoryStore;

/// SQLite connection pool shared by all entity adapters.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Idempotent schema bootstrap, executed at startup.
///
/// Uniqueness and referential integrity are also enforced at the application
/// layer; the constraints here close the race window under concurrent writes.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    color TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS priorities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    level INTEGER NOT NULL,
    color TEXT NOT NULL DEFAULT '#808080',
    description TEXT
);

CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    category_id INTEGER REFERENCES categories(id),
    priority_id INTEGER REFERENCES priorities(id),
    description TEXT,
    due_date TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT
);
";

/// Per-connection pragmas: referential integrity, WAL journal, busy timeout.
const CONNECTION_PRAGMAS: &str = "
PRAGMA foreign_keys = ON;
PRAGMA journal_mode = WAL;
PRAGMA busy_timeout = 5000;
";

/// Errors returned while preparing the storage layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The connection pool could not be built or a connection checked out.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    /// Schema bootstrap SQL failed to execute.
    #[error("schema bootstrap failed: {0}")]
    Bootstrap(#[from] diesel::result::Error),
}

/// Applies connection pragmas on every checkout.
#[derive(Debug, Clone, Copy)]
struct ConnectionTuning;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionTuning {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds an r2d2 pool over the given SQLite database path.
///
/// # Errors
///
/// Returns [`StorageError::Pool`] when the pool cannot be constructed.
pub fn establish_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(ConnectionTuning))
        .build(manager)?;
    Ok(pool)
}

/// Creates the entity tables when they do not already exist.
///
/// # Errors
///
/// Returns [`StorageError`] when a connection cannot be checked out or the
/// bootstrap SQL fails.
pub fn initialize_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    let mut conn = pool.get()?;
    conn.batch_execute(SCHEMA_SQL)?;
    Ok(())
}
