use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::storage::StoreError;

/// Request-level failures.
///
/// Every variant is answered with `200 OK`. Create/add failures go out as plain
/// text, log-query failures as `{"error": ...}`, and storage failures as the
/// bare string `error`.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("username is required")]
    MissingUsername,
    #[error("userId is required")]
    MissingUserId,
    #[error("description and duration are required")]
    MissingExerciseFields,
    #[error("duration must be a number")]
    DurationNotNumber,
    #[error("duration must be at least 1")]
    DurationTooShort,
    #[error("date is invalid")]
    InvalidDate,
    #[error("user does not exist")]
    UserDoesNotExist,
    #[error("invalid request body")]
    MalformedBody,
    #[error("from date is invalid")]
    InvalidFromDate,
    #[error("to date is invalid")]
    InvalidToDate,
    #[error("limit is not a number")]
    InvalidLimit,
    #[error("user not found")]
    UserNotFound,
    #[error("query is invalid")]
    MalformedQuery,
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl TrackerError {
    fn is_log_query_error(&self) -> bool {
        matches!(
            self,
            TrackerError::InvalidFromDate
                | TrackerError::InvalidToDate
                | TrackerError::InvalidLimit
                | TrackerError::UserNotFound
                | TrackerError::MalformedQuery
        )
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        if let TrackerError::Store(err) = &self {
            tracing::error!("Storage failure: {}", err);
            return (StatusCode::OK, "error").into_response();
        }

        if self.is_log_query_error() {
            let body = Json(json!({ "error": self.to_string() }));
            return (StatusCode::OK, body).into_response();
        }

        (StatusCode::OK, self.to_string()).into_response()
    }
}

impl From<axum::extract::rejection::FormRejection> for TrackerError {
    fn from(rejection: axum::extract::rejection::FormRejection) -> Self {
        tracing::debug!("Rejected form body: {}", rejection);
        TrackerError::MalformedBody
    }
}

impl From<axum::extract::rejection::QueryRejection> for TrackerError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection);
        TrackerError::MalformedQuery
    }
}
