//! HTTP handlers, one module per resource.

pub mod groups;
pub mod study_activities;
pub mod study_sessions;
pub mod words;

use crate::error::AppError;

/// Path ids are parsed here rather than by `Path<i64>` so a bad id answers with the
/// crate's error body.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidParameter(format!("invalid id '{}'", id_str)))
}
