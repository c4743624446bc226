//! Apply the embedded schema scripts in order. Each script runs once: applied versions are
//! recorded in `schema_migrations`, so calling [`apply_migrations`] on every startup is safe.

use crate::error::AppError;
use sqlx::SqlitePool;

pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_words_and_groups",
        sql: include_str!("../migrations/0001_create_words_and_groups.sql"),
    },
    Migration {
        version: 2,
        name: "create_study_activities",
        sql: include_str!("../migrations/0002_create_study_activities.sql"),
    },
    Migration {
        version: 3,
        name: "create_study_sessions_and_reviews",
        sql: include_str!("../migrations/0003_create_study_sessions_and_reviews.sql"),
    },
];

const ENSURE_MIGRATIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS schema_migrations (
        version INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        applied_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Apply pending migrations, each in its own transaction. Returns how many were applied.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<usize, AppError> {
    sqlx::query(ENSURE_MIGRATIONS_TABLE).execute(pool).await?;
    let applied: Vec<i64> = sqlx::query_scalar("SELECT version FROM schema_migrations ORDER BY version")
        .fetch_all(pool)
        .await?;

    let mut count = 0;
    for m in MIGRATIONS {
        if applied.contains(&m.version) {
            continue;
        }
        let mut tx = pool.begin().await?;
        sqlx::raw_sql(m.sql).execute(&mut *tx).await?;
        sqlx::query("INSERT INTO schema_migrations (version, name) VALUES (?, ?)")
            .bind(m.version)
            .bind(m.name)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(version = m.version, name = m.name, "applied migration");
        count += 1;
    }
    Ok(count)
}
