//! GET /study_activities, GET /study_activities/:id, GET /study_activities/:id/sessions

use super::parse_id;
use crate::error::AppError;
use crate::models::{StudyActivity, StudySession};
use crate::response::ok;
use crate::service::StudyActivityRepository;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

#[utoipa::path(
    get,
    path = "/study_activities",
    responses((status = 200, description = "Activity catalog", body = [StudyActivity]))
)]
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<StudyActivity>>), AppError> {
    Ok(ok(state.store.list_activities().await?))
}

#[utoipa::path(
    get,
    path = "/study_activities/{id}",
    params(("id" = i64, Path, description = "Activity id")),
    responses(
        (status = 200, description = "The activity", body = StudyActivity),
        (status = 404, description = "No such activity"),
    )
)]
pub async fn get_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<StudyActivity>), AppError> {
    Ok(ok(state.store.get_activity(parse_id(&id)?).await?))
}

#[utoipa::path(
    get,
    path = "/study_activities/{id}/sessions",
    params(("id" = i64, Path, description = "Activity id")),
    responses(
        (status = 200, description = "Sessions of the activity, oldest first", body = [StudySession]),
        (status = 404, description = "No such activity"),
    )
)]
pub async fn list_activity_sessions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Vec<StudySession>>), AppError> {
    Ok(ok(state.store.list_sessions_of_activity(parse_id(&id)?).await?))
}
