//! Table store capability and its SQLite implementation.

use crate::models::TableName;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, instrument};

/// SQLite reports an existing column only through this message.
const DUPLICATE_COLUMN_PREFIX: &str = "duplicate column name: ";

#[derive(Debug, Error)]
pub enum StoreError {
    /// `ALTER TABLE .. ADD COLUMN` on a column that is already there.
    #[error("Column {column} already exists")]
    DuplicateColumn { column: String },

    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Raw statement execution against a SQLite-dialect table store.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Execute one statement and return the number of rows it touched.
    async fn run(&self, statement: &str) -> Result<u64, StoreError>;

    /// Column names of `table`, empty if the table does not exist.
    async fn column_names(&self, table: &TableName) -> Result<Vec<String>, StoreError>;

    async fn count_rows(&self, table: &TableName) -> Result<i64, StoreError>;
}

/// Connection pool wrapper for a SQLite database.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `database_url`.
    ///
    /// Connections are never recycled, so `sqlite::memory:` with one
    /// connection behaves as a single database for the store's lifetime.
    #[instrument(skip(database_url))]
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        info!(max_connections, "SQLite connection pool established");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TableStore for SqliteStore {
    async fn run(&self, statement: &str) -> Result<u64, StoreError> {
        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(classify)
    }

    async fn column_names(&self, table: &TableName) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query(&format!("PRAGMA table_info({})", table.quoted()))
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("name").map_err(StoreError::from))
            .collect()
    }

    async fn count_rows(&self, table: &TableName) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {}",
            table.quoted()
        ))
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if let Some(column) = db_err.message().strip_prefix(DUPLICATE_COLUMN_PREFIX) {
            return StoreError::DuplicateColumn {
                column: column.trim().to_string(),
            };
        }
    }
    StoreError::Database(err)
}
