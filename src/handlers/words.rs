//! GET /words, GET /words/:id

use super::parse_id;
use crate::error::AppError;
use crate::extractors::AppQuery;
use crate::models::Word;
use crate::pagination::{Paginated, SortedPageRequest, WordSort};
use crate::response::{ok, paginated};
use crate::service::WordRepository;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

/// Optional filter accepted next to the paging parameters.
#[derive(Debug, Default, Deserialize)]
pub struct WordFilter {
    pub group_id: Option<String>,
}

/// Paginated words, optionally restricted to one group with `group_id`.
#[utoipa::path(
    get,
    path = "/words",
    params(
        ("page" = Option<u32>, Query, description = "1-based page number"),
        ("sort_by" = Option<String>, Query, description = "id | german | english | class"),
        ("order" = Option<String>, Query, description = "asc | desc"),
        ("group_id" = Option<i64>, Query, description = "only words of this group"),
    ),
    responses(
        (status = 200, description = "One page of words"),
        (status = 400, description = "Unknown sort_by or malformed group_id"),
        (status = 404, description = "group_id names no group"),
    )
)]
pub async fn list_words(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<WordFilter>,
    request: SortedPageRequest<WordSort>,
) -> Result<(StatusCode, Json<Paginated<Word>>), AppError> {
    let page = match filter.group_id.as_deref() {
        Some(raw) => state.store.list_words_in_group(parse_id(raw)?, &request).await?,
        None => state.store.list_words(&request).await?,
    };
    Ok(paginated(page, request.page))
}

#[utoipa::path(
    get,
    path = "/words/{id}",
    params(("id" = i64, Path, description = "Word id")),
    responses(
        (status = 200, description = "The word", body = Word),
        (status = 404, description = "No such word"),
    )
)]
pub async fn get_word(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Word>), AppError> {
    let word = state.store.get_word(parse_id(&id)?).await?;
    Ok(ok(word))
}
