//! Request body checks run before any storage call.

use crate::error::AppError;
use crate::models::{CreateStudySession, LogReview};

pub struct RequestValidator;

impl RequestValidator {
    pub fn create_study_session(body: &CreateStudySession) -> Result<(), AppError> {
        validate_id("group_id", body.group_id)?;
        validate_id("study_activity_id", body.study_activity_id)
    }

    pub fn log_review(session_id: i64, body: &LogReview) -> Result<(), AppError> {
        validate_id("study_session_id", session_id)?;
        validate_id("word_id", body.word_id)
    }
}

/// Row ids are assigned from 1; zero and negatives can never reference a row.
fn validate_id(field: &str, value: i64) -> Result<(), AppError> {
    if value < 1 {
        return Err(AppError::InvalidParameter(format!(
            "{} must be a positive integer, got {}",
            field, value
        )));
    }
    Ok(())
}
