//! The session/review writer and the session summary reads.
//!
//! Rows are only ever inserted. Each write inserts and reads the new row back inside one
//! transaction, so the caller always sees exactly the row it created, with the timestamp the
//! store assigned. Missing groups, activities, sessions and words are rejected by the foreign
//! keys and surface as ConstraintViolation.

use super::StudySessionRepository;
use crate::error::AppError;
use crate::models::{ReviewedWord, StudySession, StudySessionSummary, WordReviewItem};
use crate::pagination::{Page, PageRequest};
use crate::sql::{count, select_all, select_page, Filter, Listing, OrderTerm};
use crate::store::{fetch_all, fetch_count, row_exists, Store};
use async_trait::async_trait;
use sqlx::SqlitePool;

pub(super) const SESSIONS: Listing = Listing {
    columns: "s.id, s.group_id, s.study_activity_id, s.created_at",
    from: "study_sessions s",
    joins: &[],
    group_by: None,
};

const SUMMARIES: Listing = Listing {
    columns: "s.id, s.group_id, g.name AS group_name, s.study_activity_id, \
              a.name AS activity_name, s.created_at, COUNT(r.id) AS review_items_count",
    from: "study_sessions s",
    joins: &[
        "JOIN groups g ON g.id = s.group_id",
        "JOIN study_activities a ON a.id = s.study_activity_id",
        "LEFT JOIN word_review_items r ON r.study_session_id = s.id",
    ],
    group_by: Some("s.id"),
};

const REVIEWED_WORDS: Listing = Listing {
    columns: "w.id, w.german, w.english, w.class, \
              SUM(CASE WHEN r.correct THEN 1 ELSE 0 END) AS correct_count, \
              SUM(CASE WHEN r.correct THEN 0 ELSE 1 END) AS wrong_count",
    from: "word_review_items r",
    joins: &["JOIN words w ON w.id = r.word_id"],
    group_by: Some("w.id"),
};

const NEWEST_FIRST: [OrderTerm; 2] = [OrderTerm::desc("s.created_at"), OrderTerm::desc("s.id")];

async fn insert_session(pool: &SqlitePool, group_id: i64, study_activity_id: i64) -> Result<StudySession, AppError> {
    let mut tx = pool.begin().await?;
    let id = sqlx::query("INSERT INTO study_sessions (group_id, study_activity_id) VALUES (?, ?)")
        .bind(group_id)
        .bind(study_activity_id)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
    let session = sqlx::query_as::<_, StudySession>(
        "SELECT id, group_id, study_activity_id, created_at FROM study_sessions WHERE id = ?",
    )
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;
    tracing::debug!(id, group_id, study_activity_id, "created study session");
    Ok(session)
}

async fn insert_review(pool: &SqlitePool, session_id: i64, word_id: i64, correct: bool) -> Result<WordReviewItem, AppError> {
    let mut tx = pool.begin().await?;
    let id = sqlx::query("INSERT INTO word_review_items (word_id, study_session_id, correct) VALUES (?, ?, ?)")
        .bind(word_id)
        .bind(session_id)
        .bind(correct)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();
    let item = sqlx::query_as::<_, WordReviewItem>(
        "SELECT id, word_id, study_session_id, correct, created_at FROM word_review_items WHERE id = ?",
    )
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;
    tracing::debug!(id, session_id, word_id, correct, "logged review");
    Ok(item)
}

async fn summaries_page(pool: &SqlitePool, request: &PageRequest) -> Result<Page<StudySessionSummary>, AppError> {
    let total = fetch_count(pool, &count(&SUMMARIES, &[])).await?;
    let items = fetch_all(pool, &select_page(&SUMMARIES, &[], &NEWEST_FIRST, request)).await?;
    Ok(Page { items, total })
}

async fn summary_by_id(pool: &SqlitePool, id: i64) -> Result<StudySessionSummary, AppError> {
    let q = select_all(&SUMMARIES, &[Filter::eq("s.id", id)], &[]);
    fetch_all::<StudySessionSummary>(pool, &q)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("study session {}", id)))
}

async fn reviewed_words_page(
    pool: &SqlitePool,
    session_id: i64,
    request: &PageRequest,
) -> Result<Page<ReviewedWord>, AppError> {
    if !row_exists(pool, "study_sessions", session_id).await? {
        return Err(AppError::NotFound(format!("study session {}", session_id)));
    }
    let filters = [Filter::eq("r.study_session_id", session_id)];
    let total = fetch_count(pool, &count(&REVIEWED_WORDS, &filters)).await?;
    let ordering = [OrderTerm::asc("w.german"), OrderTerm::asc("w.id")];
    let items = fetch_all(pool, &select_page(&REVIEWED_WORDS, &filters, &ordering, request)).await?;
    Ok(Page { items, total })
}

#[async_trait]
impl StudySessionRepository for Store {
    async fn create_study_session(&self, group_id: i64, study_activity_id: i64) -> Result<StudySession, AppError> {
        self.write("create_study_session", insert_session(self.pool(), group_id, study_activity_id))
            .await
    }

    async fn log_review(&self, session_id: i64, word_id: i64, correct: bool) -> Result<WordReviewItem, AppError> {
        self.write("log_review", insert_review(self.pool(), session_id, word_id, correct))
            .await
    }

    async fn list_study_sessions(&self, request: &PageRequest) -> Result<Page<StudySessionSummary>, AppError> {
        self.read("list_study_sessions", || summaries_page(self.pool(), request)).await
    }

    async fn get_study_session(&self, id: i64) -> Result<StudySessionSummary, AppError> {
        self.read("get_study_session", || summary_by_id(self.pool(), id)).await
    }

    async fn list_reviewed_words(&self, session_id: i64, request: &PageRequest) -> Result<Page<ReviewedWord>, AppError> {
        self.read("list_reviewed_words", || reviewed_words_page(self.pool(), session_id, request))
            .await
    }
}
