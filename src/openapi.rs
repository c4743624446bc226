//! OpenAPI description of the HTTP surface, served at `/openapi.json`.

use crate::handlers::{groups, study_activities, study_sessions, words};
use crate::models::{
    CreateStudySession, Group, LogReview, ReviewedWord, StudyActivity, StudySession,
    StudySessionSummary, Word, WordReviewItem,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Language learning portal API"),
    paths(
        words::list_words,
        words::get_word,
        groups::list_groups,
        groups::get_group,
        groups::list_group_words,
        groups::list_group_sessions,
        study_activities::list_activities,
        study_activities::get_activity,
        study_activities::list_activity_sessions,
        study_sessions::create_study_session,
        study_sessions::log_review,
        study_sessions::list_study_sessions,
        study_sessions::get_study_session,
        study_sessions::list_reviewed_words,
    ),
    components(schemas(
        Word,
        Group,
        StudyActivity,
        StudySession,
        WordReviewItem,
        StudySessionSummary,
        ReviewedWord,
        CreateStudySession,
        LogReview,
    ))
)]
pub struct ApiDoc;
