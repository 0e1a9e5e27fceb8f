//! Storage layer: SQLite connection, list-query building and row mapping.

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

pub mod mapper;
pub mod query;
pub mod schema;
pub mod seed;

pub use mapper::{Clock, RecordFields, Status, SystemClock};
pub use query::{ListFilter, ListQuery, SortOrder};
pub use schema::{Events, ListingTable, Races};
pub use seed::{DemoSeed, Seed, SchemaSeed};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Query build error: {0}")]
    QueryBuild(#[from] sea_query::error::Error),

    #[error("Row mapping failed: {0}")]
    Mapping(#[from] MappingError),

    /// The initialization task panicked or was aborted.
    #[error("Initialization task failed: {0}")]
    InitTask(#[from] tokio::task::JoinError),

    /// Repository initialization failed. Every caller of `init` sees the
    /// same underlying error.
    #[error("Initialization failed: {0}")]
    Init(#[source] Arc<StorageError>),
}

/// A row did not have the shape the listing expects.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("expected {expected} columns, row has {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("column {index} ({column}): {source}")]
    Column {
        index: usize,
        column: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("advertised start time not representable: seconds={seconds}, nanos={nanos}")]
    Timestamp { seconds: i64, nanos: u32 },
}

/// Open a SQLite pool for the given database URL.
///
/// In-memory databases are private to a connection, so `sqlite::memory:`
/// gets a single long-lived connection.
pub async fn connect(url: &str) -> Result<SqlitePool> {
    let options: SqliteConnectOptions = url.parse()?;
    let in_memory = url.contains(":memory:") || url.contains("mode=memory");

    let pool = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .connect_with(options.create_if_missing(true))
            .await?
    };

    info!(database = %url, "Storage connected");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_memory_shares_one_database() {
        let pool = connect("sqlite::memory:").await.unwrap();
        sqlx::query("CREATE TABLE t (x INTEGER)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO t (x) VALUES (1)")
            .execute(&pool)
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM t")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_init_error_keeps_source_message() {
        let inner = Arc::new(StorageError::Database(sqlx::Error::RowNotFound));
        let err = StorageError::Init(inner);
        assert!(err.to_string().starts_with("Initialization failed: Database error"));
    }
}
