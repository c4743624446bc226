//! Word reads: sorted pages over all words or over one group's members, and lookup by id.

use super::WordRepository;
use crate::error::AppError;
use crate::models::Word;
use crate::pagination::{Page, SortKey, SortedPageRequest, WordSort};
use crate::sql::{count, select_page, Filter, Listing, OrderTerm};
use crate::store::{fetch_all, fetch_count, row_exists, Store};
use async_trait::async_trait;
use sqlx::SqlitePool;

const WORDS: Listing = Listing {
    columns: "w.id, w.german, w.english, w.class",
    from: "words w",
    joins: &[],
    group_by: None,
};

pub(super) const GROUP_WORDS: Listing = Listing {
    columns: "w.id, w.german, w.english, w.class",
    from: "words w",
    joins: &["JOIN word_groups wg ON wg.word_id = w.id"],
    group_by: None,
};

/// Requested order, then id so equal sort values keep a stable position across pages.
fn word_ordering(request: &SortedPageRequest<WordSort>) -> [OrderTerm; 2] {
    [
        OrderTerm::qualified("w", request.sort.column(), request.order),
        OrderTerm::asc("w.id"),
    ]
}

async fn page_of(
    pool: &SqlitePool,
    listing: &Listing,
    filters: &[Filter],
    request: &SortedPageRequest<WordSort>,
) -> Result<Page<Word>, AppError> {
    let total = fetch_count(pool, &count(listing, filters)).await?;
    let q = select_page(listing, filters, &word_ordering(request), &request.page);
    let items = fetch_all(pool, &q).await?;
    Ok(Page { items, total })
}

async fn words_in_group(
    pool: &SqlitePool,
    group_id: i64,
    request: &SortedPageRequest<WordSort>,
) -> Result<Page<Word>, AppError> {
    if !row_exists(pool, "groups", group_id).await? {
        return Err(AppError::NotFound(format!("group {}", group_id)));
    }
    page_of(pool, &GROUP_WORDS, &[Filter::eq("wg.group_id", group_id)], request).await
}

async fn word_by_id(pool: &SqlitePool, id: i64) -> Result<Word, AppError> {
    sqlx::query_as::<_, Word>("SELECT id, german, english, class FROM words WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("word {}", id)))
}

#[async_trait]
impl WordRepository for Store {
    async fn list_words(&self, request: &SortedPageRequest<WordSort>) -> Result<Page<Word>, AppError> {
        self.read("list_words", || page_of(self.pool(), &WORDS, &[], request)).await
    }

    async fn get_word(&self, id: i64) -> Result<Word, AppError> {
        self.read("get_word", || word_by_id(self.pool(), id)).await
    }

    async fn list_words_in_group(
        &self,
        group_id: i64,
        request: &SortedPageRequest<WordSort>,
    ) -> Result<Page<Word>, AppError> {
        self.read("list_words_in_group", || words_in_group(self.pool(), group_id, request))
            .await
    }
}
