//! Runs rendered statements against a SQLite pool.

use sqlstmt_core::{Executor, InsertId, SqlValue};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use tracing::debug;

use crate::error::{ExecError, Result};

/// An [`Executor`] backed by a `sqlx` SQLite pool.
///
/// Bound values are attached positionally to the `?` placeholders and the
/// id reported is SQLite's `last_insert_rowid()` for the statement.
#[derive(Debug, Clone)]
pub struct SqliteExecutor {
    pool: SqlitePool,
}

impl SqliteExecutor {
    /// Wraps an existing pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `url`.
    ///
    /// In-memory databases are private to a connection, so a `:memory:` URL
    /// gets a single-connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ExecError::Database`] if the database cannot be opened.
    pub async fn connect(url: &str) -> Result<Self> {
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;
        debug!(url, max_connections, "opened sqlite pool");
        Ok(Self::new(pool))
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Executor for SqliteExecutor {
    type Error = ExecError;

    async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<InsertId> {
        let mut query = sqlx::query(sql);
        for value in params {
            query = bind_value(query, value.clone());
        }

        let result = query.execute(&self.pool).await?;
        let id = result.last_insert_rowid();
        debug!(id, rows = result.rows_affected(), "insert executed");
        Ok(InsertId::Int(id))
    }
}

/// Binds a `SqlValue` to the next placeholder of a query.
fn bind_value<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}
