use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Client-facing message for every store-side failure.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save contact";

/// A submission that does not conform to the contact schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum PersistenceError {
    Database(sqlx::Error),
    Timeout(Duration),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::Database(err) => write!(f, "Database Error: {err}"),
            PersistenceError::Timeout(after) => {
                write!(f, "Store did not answer within {}ms", after.as_millis())
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        PersistenceError::Database(err)
    }
}

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Persistence(PersistenceError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "Bad Request: {err}"),
            AppError::Persistence(err) => write!(f, "Persistence Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(err) => {
                tracing::debug!("Rejected contact submission: {err}");
                (StatusCode::BAD_REQUEST, err.message.clone())
            }
            AppError::Persistence(err) => {
                tracing::error!("Failed to save contact: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SAVE_FAILED_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<PersistenceError> for AppError {
    fn from(err: PersistenceError) -> Self {
        AppError::Persistence(err)
    }
}

/// Response for anything that escapes a handler unexpectedly.
pub fn save_failed_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": SAVE_FAILED_MESSAGE })),
    )
        .into_response()
}
