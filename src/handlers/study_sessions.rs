//! Session creation, review logging and the session summary reads.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::AppJson;
use crate::models::{
    CreateStudySession, LogReview, ReviewedWord, StudySession, StudySessionSummary, WordReviewItem,
};
use crate::pagination::{PageRequest, Paginated};
use crate::response::{created, ok, paginated};
use crate::service::{RequestValidator, StudyActivityRepository, StudySessionRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    post,
    path = "/study_sessions",
    request_body = CreateStudySession,
    responses(
        (status = 201, description = "Session created", body = StudySession),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "Group or activity does not exist"),
    )
)]
pub async fn create_study_session(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateStudySession>,
) -> Result<(StatusCode, Json<StudySession>), AppError> {
    RequestValidator::create_study_session(&body)?;
    let session = state
        .store
        .create_session(body.group_id, body.study_activity_id)
        .await?;
    tracing::info!(id = session.id, group_id = session.group_id, "study session started");
    Ok(created(session))
}

#[utoipa::path(
    post,
    path = "/study_sessions/{id}/review",
    params(("id" = i64, Path, description = "Session id")),
    request_body = LogReview,
    responses(
        (status = 201, description = "Review logged", body = WordReviewItem),
        (status = 400, description = "Malformed id or body"),
        (status = 409, description = "Session or word does not exist"),
    )
)]
pub async fn log_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(body): AppJson<LogReview>,
) -> Result<(StatusCode, Json<WordReviewItem>), AppError> {
    let session_id = parse_id(&id)?;
    RequestValidator::log_review(session_id, &body)?;
    let item = state.store.log_review(session_id, body.word_id, body.correct).await?;
    Ok(created(item))
}

/// Newest first.
#[utoipa::path(
    get,
    path = "/study_sessions",
    params(("page" = Option<u32>, Query, description = "1-based page number")),
    responses((status = 200, description = "One page of session summaries"))
)]
pub async fn list_study_sessions(
    State(state): State<AppState>,
    request: PageRequest,
) -> Result<(StatusCode, Json<Paginated<StudySessionSummary>>), AppError> {
    let page = state.store.list_study_sessions(&request).await?;
    Ok(paginated(page, request))
}

#[utoipa::path(
    get,
    path = "/study_sessions/{id}",
    params(("id" = i64, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session summary", body = StudySessionSummary),
        (status = 404, description = "No such session"),
    )
)]
pub async fn get_study_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<StudySessionSummary>), AppError> {
    Ok(ok(state.store.get_study_session(parse_id(&id)?).await?))
}

#[utoipa::path(
    get,
    path = "/study_sessions/{id}/words",
    params(
        ("id" = i64, Path, description = "Session id"),
        ("page" = Option<u32>, Query, description = "1-based page number"),
    ),
    responses(
        (status = 200, description = "Words reviewed in the session with outcome tallies"),
        (status = 404, description = "No such session"),
    )
)]
pub async fn list_reviewed_words(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: PageRequest,
) -> Result<(StatusCode, Json<Paginated<ReviewedWord>>), AppError> {
    let page = state.store.list_reviewed_words(parse_id(&id)?, &request).await?;
    Ok(paginated(page, request))
}
