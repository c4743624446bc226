//! Activity catalog reads. Starting a session is inherited from the writer.

use super::study_sessions::SESSIONS;
use super::StudyActivityRepository;
use crate::error::AppError;
use crate::models::{StudyActivity, StudySession};
use crate::sql::{select_all, Filter, OrderTerm};
use crate::store::{fetch_all, row_exists, Store};
use async_trait::async_trait;
use sqlx::SqlitePool;

async fn all_activities(pool: &SqlitePool) -> Result<Vec<StudyActivity>, AppError> {
    tracing::debug!("query study_activities");
    Ok(sqlx::query_as::<_, StudyActivity>("SELECT id, name, url FROM study_activities ORDER BY id")
        .fetch_all(pool)
        .await?)
}

async fn activity_by_id(pool: &SqlitePool, id: i64) -> Result<StudyActivity, AppError> {
    sqlx::query_as::<_, StudyActivity>("SELECT id, name, url FROM study_activities WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("study activity {}", id)))
}

async fn activity_sessions(pool: &SqlitePool, id: i64) -> Result<Vec<StudySession>, AppError> {
    if !row_exists(pool, "study_activities", id).await? {
        return Err(AppError::NotFound(format!("study activity {}", id)));
    }
    let q = select_all(
        &SESSIONS,
        &[Filter::eq("s.study_activity_id", id)],
        &[OrderTerm::asc("s.created_at"), OrderTerm::asc("s.id")],
    );
    fetch_all(pool, &q).await
}

#[async_trait]
impl StudyActivityRepository for Store {
    async fn list_activities(&self) -> Result<Vec<StudyActivity>, AppError> {
        self.read("list_activities", || all_activities(self.pool())).await
    }

    async fn get_activity(&self, id: i64) -> Result<StudyActivity, AppError> {
        self.read("get_activity", || activity_by_id(self.pool(), id)).await
    }

    async fn list_sessions_of_activity(&self, id: i64) -> Result<Vec<StudySession>, AppError> {
        self.read("list_sessions_of_activity", || activity_sessions(self.pool(), id)).await
    }
}
