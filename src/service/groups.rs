//! Group reads. Word counts come from `word_groups` at read time, never from a stored counter.

use super::study_sessions::SESSIONS;
use super::words::GROUP_WORDS;
use super::GroupRepository;
use crate::error::AppError;
use crate::models::{Group, StudySession, Word};
use crate::pagination::{Page, PageRequest};
use crate::sql::{count, select_all, select_page, Filter, Listing, OrderTerm};
use crate::store::{fetch_all, fetch_count, row_exists, Store};
use async_trait::async_trait;
use sqlx::SqlitePool;

const GROUPS: Listing = Listing {
    columns: "g.id, g.name, g.description, \
              (SELECT COUNT(*) FROM word_groups wg WHERE wg.group_id = g.id) AS words_count",
    from: "groups g",
    joins: &[],
    group_by: None,
};

async fn groups_page(pool: &SqlitePool, request: &PageRequest) -> Result<Page<Group>, AppError> {
    let total = fetch_count(pool, &count(&GROUPS, &[])).await?;
    let items = fetch_all(pool, &select_page(&GROUPS, &[], &[OrderTerm::asc("g.id")], request)).await?;
    Ok(Page { items, total })
}

async fn group_by_id(pool: &SqlitePool, id: i64) -> Result<Group, AppError> {
    let q = select_all(&GROUPS, &[Filter::eq("g.id", id)], &[]);
    fetch_all::<Group>(pool, &q)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("group {}", id)))
}

async fn ensure_group(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    if row_exists(pool, "groups", id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("group {}", id)))
    }
}

async fn member_words(pool: &SqlitePool, id: i64) -> Result<Vec<Word>, AppError> {
    ensure_group(pool, id).await?;
    let q = select_all(&GROUP_WORDS, &[Filter::eq("wg.group_id", id)], &[OrderTerm::asc("w.id")]);
    fetch_all(pool, &q).await
}

async fn group_sessions(pool: &SqlitePool, id: i64) -> Result<Vec<StudySession>, AppError> {
    ensure_group(pool, id).await?;
    let q = select_all(
        &SESSIONS,
        &[Filter::eq("s.group_id", id)],
        &[OrderTerm::asc("s.created_at"), OrderTerm::asc("s.id")],
    );
    fetch_all(pool, &q).await
}

#[async_trait]
impl GroupRepository for Store {
    async fn list_groups(&self, request: &PageRequest) -> Result<Page<Group>, AppError> {
        self.read("list_groups", || groups_page(self.pool(), request)).await
    }

    async fn get_group(&self, id: i64) -> Result<Group, AppError> {
        self.read("get_group", || group_by_id(self.pool(), id)).await
    }

    async fn list_words_of_group(&self, id: i64) -> Result<Vec<Word>, AppError> {
        self.read("list_words_of_group", || member_words(self.pool(), id)).await
    }

    async fn list_study_sessions_of_group(&self, id: i64) -> Result<Vec<StudySession>, AppError> {
        self.read("list_study_sessions_of_group", || group_sessions(self.pool(), id)).await
    }
}
