//! Server-side error type
//!
//! Service calls return [`AppResult`]. The HTTP boundary collapses every
//! variant into a bare `500 Internal Server Error`: callers never learn
//! whether the store was down or the request was malformed. The cause is
//! logged before it is dropped.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed request: {0}")]
    Request(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Request(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!(error = ?e, "Database error"),
            AppError::Validation(message) => tracing::warn!(%message, "Rejected invalid input"),
            AppError::Request(message) => tracing::warn!(%message, "Rejected malformed request"),
        }

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
