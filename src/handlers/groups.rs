//! GET /groups, GET /groups/:id and the group-scoped word and session listings.

use super::parse_id;
use crate::error::AppError;
use crate::models::{Group, StudySession, Word};
use crate::pagination::{PageRequest, Paginated};
use crate::response::{ok, paginated};
use crate::service::GroupRepository;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// Paginated by id; `sort_by` and `order` are ignored here.
#[utoipa::path(
    get,
    path = "/groups",
    params(("page" = Option<u32>, Query, description = "1-based page number")),
    responses((status = 200, description = "One page of groups"))
)]
pub async fn list_groups(
    State(state): State<AppState>,
    request: PageRequest,
) -> Result<(StatusCode, Json<Paginated<Group>>), AppError> {
    let page = state.store.list_groups(&request).await?;
    Ok(paginated(page, request))
}

#[utoipa::path(
    get,
    path = "/groups/{id}",
    params(("id" = i64, Path, description = "Group id")),
    responses(
        (status = 200, description = "The group", body = Group),
        (status = 404, description = "No such group"),
    )
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Group>), AppError> {
    Ok(ok(state.store.get_group(parse_id(&id)?).await?))
}

/// Every member word, unpaginated. The paginated form is `GET /words?group_id=`.
#[utoipa::path(
    get,
    path = "/groups/{id}/words",
    params(("id" = i64, Path, description = "Group id")),
    responses(
        (status = 200, description = "Member words", body = [Word]),
        (status = 404, description = "No such group"),
    )
)]
pub async fn list_group_words(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Vec<Word>>), AppError> {
    Ok(ok(state.store.list_words_of_group(parse_id(&id)?).await?))
}

#[utoipa::path(
    get,
    path = "/groups/{id}/study_sessions",
    params(("id" = i64, Path, description = "Group id")),
    responses(
        (status = 200, description = "Sessions of the group, oldest first", body = [StudySession]),
        (status = 404, description = "No such group"),
    )
)]
pub async fn list_group_sessions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Vec<StudySession>>), AppError> {
    Ok(ok(state.store.list_study_sessions_of_group(parse_id(&id)?).await?))
}
