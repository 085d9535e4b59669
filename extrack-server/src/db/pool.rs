//! Database connection pool management
//!
//! Uses a sqlx SqlitePool backed by a single database file. The schema is
//! created on open when absent; there is no migration tooling.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low: SQLite serializes writers anyway.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = include_str!("schema.sql");

/// Open (creating if missing) the SQLite database at `path`.
///
/// The parent directory is created when needed and the schema is applied.
///
/// # Errors
///
/// Returns an error if the file can't be opened or the schema fails.
///
/// # Example
///
/// ```ignore
/// let pool = open_pool("data/exercise-tracker.db").await?;
/// ```
pub async fn open_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;
    tracing::debug!(path = %path.display(), "database opened");
    Ok(pool)
}

/// Open a private in-memory database with the schema applied.
///
/// Every connection to `:memory:` is its own database, so the pool is pinned
/// to one connection that never expires.
pub async fn open_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new().in_memory(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Create tables and indexes if they don't exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
