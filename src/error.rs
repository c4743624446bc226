//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("validation: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] sqlx::Error),
    #[error("timed out: {0}")]
    Timeout(&'static str),
}

impl AppError {
    /// Only storage failures unrelated to input may be retried by a caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::StorageUnavailable(_))
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::InvalidParameter(_) => (StatusCode::BAD_REQUEST, "invalid_parameter"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::ConstraintViolation(_) => (StatusCode::CONFLICT, "constraint_violation"),
            AppError::StorageUnavailable(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_unavailable"),
            AppError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        let constraint = match &e {
            sqlx::Error::RowNotFound => return AppError::NotFound("no matching row".into()),
            sqlx::Error::Database(db) => {
                let by_kind = matches!(
                    db.kind(),
                    ErrorKind::ForeignKeyViolation
                        | ErrorKind::UniqueViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::CheckViolation
                );
                // SQLite reports some constraint failures without an extended code.
                (by_kind || db.message().contains("constraint failed")).then(|| db.message().to_string())
            }
            _ => None,
        };
        match constraint {
            Some(message) => AppError::ConstraintViolation(message),
            None => AppError::StorageUnavailable(e),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let e: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(e, AppError::NotFound(_)));
        assert!(!e.is_retryable());
    }

    #[test]
    fn pool_failures_are_storage_unavailable_and_retryable() {
        let e: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(e, AppError::StorageUnavailable(_)));
        assert!(e.is_retryable());
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (AppError::InvalidParameter("page".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("word 7".into()), StatusCode::NOT_FOUND),
            (AppError::ConstraintViolation("fk".into()), StatusCode::CONFLICT),
            (AppError::Timeout("get_word"), StatusCode::GATEWAY_TIMEOUT),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
