//! Repository capability sets, one per entity, all implemented by [`crate::store::Store`].

mod groups;
mod study_activities;
mod study_sessions;
pub mod validation;
mod words;

use crate::error::AppError;
use crate::models::{
    Group, ReviewedWord, StudyActivity, StudySession, StudySessionSummary, Word, WordReviewItem,
};
use crate::pagination::{Page, PageRequest, SortedPageRequest, WordSort};
use async_trait::async_trait;

pub use validation::RequestValidator;

#[async_trait]
pub trait WordRepository: Send + Sync {
    /// One page of words in the requested order, with the total across all pages.
    async fn list_words(&self, request: &SortedPageRequest<WordSort>) -> Result<Page<Word>, AppError>;

    async fn get_word(&self, id: i64) -> Result<Word, AppError>;

    /// Like [`WordRepository::list_words`] but restricted to members of one group.
    /// NotFound when the group does not exist.
    async fn list_words_in_group(
        &self,
        group_id: i64,
        request: &SortedPageRequest<WordSort>,
    ) -> Result<Page<Word>, AppError>;
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Groups by id; sorting is not offered on this listing.
    async fn list_groups(&self, request: &PageRequest) -> Result<Page<Group>, AppError>;

    async fn get_group(&self, id: i64) -> Result<Group, AppError>;

    /// Every member word, unpaginated, ordered by id.
    async fn list_words_of_group(&self, id: i64) -> Result<Vec<Word>, AppError>;

    async fn list_study_sessions_of_group(&self, id: i64) -> Result<Vec<StudySession>, AppError>;
}

#[async_trait]
pub trait StudySessionRepository: Send + Sync {
    /// Insert a session and read it back in the same transaction.
    /// ConstraintViolation when the group or activity does not exist.
    async fn create_study_session(&self, group_id: i64, study_activity_id: i64) -> Result<StudySession, AppError>;

    /// Insert a review and read it back in the same transaction.
    /// ConstraintViolation when the session or word does not exist.
    async fn log_review(&self, session_id: i64, word_id: i64, correct: bool) -> Result<WordReviewItem, AppError>;

    /// Newest first.
    async fn list_study_sessions(&self, request: &PageRequest) -> Result<Page<StudySessionSummary>, AppError>;

    async fn get_study_session(&self, id: i64) -> Result<StudySessionSummary, AppError>;

    /// Distinct words reviewed in the session with their outcome tallies, by German term.
    async fn list_reviewed_words(&self, session_id: i64, request: &PageRequest) -> Result<Page<ReviewedWord>, AppError>;
}

#[async_trait]
pub trait StudyActivityRepository: StudySessionRepository {
    async fn list_activities(&self) -> Result<Vec<StudyActivity>, AppError>;

    async fn get_activity(&self, id: i64) -> Result<StudyActivity, AppError>;

    async fn list_sessions_of_activity(&self, id: i64) -> Result<Vec<StudySession>, AppError>;

    /// Starting a session from the activity side shares the single session write path.
    async fn create_session(&self, group_id: i64, study_activity_id: i64) -> Result<StudySession, AppError> {
        self.create_study_session(group_id, study_activity_id).await
    }
}
