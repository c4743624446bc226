//! Resource routes.

use crate::handlers::{groups, study_activities, study_sessions, words};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/words", get(words::list_words))
        .route("/words/:id", get(words::get_word))
        .route("/groups", get(groups::list_groups))
        .route("/groups/:id", get(groups::get_group))
        .route("/groups/:id/words", get(groups::list_group_words))
        .route("/groups/:id/study_sessions", get(groups::list_group_sessions))
        .route("/study_activities", get(study_activities::list_activities))
        .route("/study_activities/:id", get(study_activities::get_activity))
        .route(
            "/study_activities/:id/sessions",
            get(study_activities::list_activity_sessions),
        )
        .route(
            "/study_sessions",
            get(study_sessions::list_study_sessions).post(study_sessions::create_study_session),
        )
        .route("/study_sessions/:id", get(study_sessions::get_study_session))
        .route("/study_sessions/:id/words", get(study_sessions::list_reviewed_words))
        .route("/study_sessions/:id/review", post(study_sessions::log_review))
        .with_state(state)
}
