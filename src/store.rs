//! Storage handle: the SQLite pool plus the per-call deadline and read retry policy.
//! One `Store` is built at startup and cloned into every handler; the pool inside is shared.

use crate::config::AppConfig;
use crate::error::{AppError, ConfigError};
use crate::sql::QueryBuf;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const RETRY_BACKOFF: Duration = Duration::from_millis(50);

/// Open the pool. Foreign keys are enforced on every connection: the writer relies on them
/// to reject sessions and reviews that point at missing rows.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|_| ConfigError::InvalidValue {
            key: "DATABASE_URL",
            value: database_url.to_string(),
        })?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await
        .map_err(AppError::StorageUnavailable)?;
    Ok(pool)
}

#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
    timeout: Duration,
    read_retries: u32,
}

impl Store {
    pub fn new(pool: SqlitePool, timeout: Duration, read_retries: u32) -> Self {
        Store {
            pool,
            timeout,
            read_retries,
        }
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let pool = connect(&config.database_url, config.max_connections).await?;
        Ok(Store::new(pool, config.store_timeout, config.store_read_retries))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Cheap liveness probe used by the readiness route.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.write("ping", async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        })
        .await
    }

    /// Run a read under the deadline; storage failures are retried up to `read_retries` times.
    /// NotFound, InvalidParameter and constraint errors are returned at once.
    pub(crate) async fn read<T, F, Fut>(&self, op: &'static str, mut f: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut + Send,
        Fut: Future<Output = Result<T, AppError>> + Send,
        T: Send,
    {
        let mut attempt = 0u32;
        loop {
            match self.bounded(op, f()).await {
                Err(e) if e.is_retryable() && attempt < self.read_retries => {
                    attempt += 1;
                    tracing::warn!(op, attempt, error = %e, "retrying read after storage failure");
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                other => return other,
            }
        }
    }

    /// Run a write under the deadline. Never retried.
    pub(crate) async fn write<T, Fut>(&self, op: &'static str, fut: Fut) -> Result<T, AppError>
    where
        Fut: Future<Output = Result<T, AppError>> + Send,
    {
        self.bounded(op, fut).await
    }

    async fn bounded<T, Fut>(&self, op: &'static str, fut: Fut) -> Result<T, AppError>
    where
        Fut: Future<Output = Result<T, AppError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(op, timeout_ms = self.timeout.as_millis() as u64, "store call timed out");
                Err(AppError::Timeout(op))
            }
        }
    }
}

/// Fetch all rows of a built query into `T`.
pub(crate) async fn fetch_all<T>(pool: &SqlitePool, q: &QueryBuf) -> Result<Vec<T>, AppError>
where
    T: for<'r> FromRow<'r, sqlx::sqlite::SqliteRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<Sqlite, T>(&q.sql);
    for p in &q.params {
        query = query.bind(*p);
    }
    Ok(query.fetch_all(pool).await?)
}

/// Run a built COUNT query.
pub(crate) async fn fetch_count(pool: &SqlitePool, q: &QueryBuf) -> Result<i64, AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_scalar::<Sqlite, i64>(&q.sql);
    for p in &q.params {
        query = query.bind(*p);
    }
    Ok(query.fetch_one(pool).await?)
}

/// `SELECT EXISTS(...)` by id for a table named in this crate.
pub(crate) async fn row_exists(pool: &SqlitePool, table: &'static str, id: i64) -> Result<bool, AppError> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)", table);
    tracing::debug!(sql = %sql, id, "query");
    let exists: i64 = sqlx::query_scalar::<Sqlite, i64>(&sql).bind(id).fetch_one(pool).await?;
    Ok(exists != 0)
}
