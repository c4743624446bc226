//! Row types returned by the stores and request bodies accepted by the writer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Word {
    pub id: i64,
    pub german: String,
    pub english: String,
    /// Grammatical class tag, e.g. "noun".
    pub class: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Derived from `word_groups` at read time.
    pub words_count: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudyActivity {
    pub id: i64,
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudySession {
    pub id: i64,
    pub group_id: i64,
    pub study_activity_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WordReviewItem {
    pub id: i64,
    pub word_id: i64,
    pub study_session_id: i64,
    pub correct: bool,
    pub created_at: DateTime<Utc>,
}

/// Session joined with its group and activity names and the number of reviews logged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudySessionSummary {
    pub id: i64,
    pub group_id: i64,
    pub group_name: String,
    pub study_activity_id: i64,
    pub activity_name: String,
    pub created_at: DateTime<Utc>,
    pub review_items_count: i64,
}

/// A word reviewed in one session with its per-session outcome tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ReviewedWord {
    pub id: i64,
    pub german: String,
    pub english: String,
    pub class: String,
    pub correct_count: i64,
    pub wrong_count: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateStudySession {
    pub group_id: i64,
    pub study_activity_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LogReview {
    pub word_id: i64,
    pub correct: bool,
}
