//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite serializes writers, so all inserts share one writer connection while
//! history reads fan out over a read-only pool.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// File name of the database inside the data directory.
pub const DATABASE_FILE: &str = "supportdesk.db";

const READER_CONNECTIONS: u32 = 8;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Split read/write pool for SQLite.
///
/// `writer` holds the only write connection; `reader` connections are opened
/// read-only after migrations have run.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open the writer, apply migrations, then open the reader pool.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = connect_options(database_url)?;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options.clone())
            .await?;
        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(READER_CONNECTIONS)
            .connect_with(options.read_only(true))
            .await?;

        tracing::debug!(readers = READER_CONNECTIONS, "Session database ready");
        Ok(Self { reader, writer })
    }
}

/// Shared connection settings: WAL, foreign keys, busy timeout, create on open.
fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .busy_timeout(BUSY_TIMEOUT)
        .create_if_missing(true))
}

/// Build the database URL for `{data_dir}/supportdesk.db`.
pub fn database_url_for(data_dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", data_dir.join(DATABASE_FILE).display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creates_tables() {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url_for(dir.path());

        let pool = DatabasePool::new(&url).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(&pool.reader)
        .await
        .unwrap();

        let table_names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(table_names, vec!["messages", "sessions"]);
    }

    #[tokio::test]
    async fn test_pool_wal_mode() {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url_for(dir.path());

        let pool = DatabasePool::new(&url).await.unwrap();

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.writer)
            .await
            .unwrap();

        assert_eq!(result.0.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn test_pool_foreign_keys_enforced() {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url_for(dir.path());

        let pool = DatabasePool::new(&url).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO messages (session_id, role, content, timestamp) VALUES ('nope', 'user', 'hi', '2025-01-01T00:00:00Z')",
        )
        .execute(&pool.writer)
        .await;

        assert!(result.is_err(), "orphan message should violate the foreign key");
    }

    #[tokio::test]
    async fn test_reader_pool_rejects_writes() {
        let dir = tempfile::tempdir().unwrap();
        let pool = DatabasePool::new(&database_url_for(dir.path())).await.unwrap();

        let result = sqlx::query("INSERT INTO sessions (id, created_at) VALUES ('s', 'now')")
            .execute(&pool.reader)
            .await;
        assert!(result.is_err(), "reader connections are read-only");

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions")
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }

    #[test]
    fn test_database_url_for() {
        let url = database_url_for(Path::new("/tmp/desk"));
        assert_eq!(url, "sqlite:///tmp/desk/supportdesk.db?mode=rwc");
    }
}
