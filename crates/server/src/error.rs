use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::services::CapacityError;

pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced to API clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // Constraint violations are client errors, everything else is ours.
        if let sqlx::Error::Database(db) = &err {
            match db.kind() {
                sqlx::error::ErrorKind::UniqueViolation => {
                    return AppError::Conflict(db.message().to_string());
                }
                sqlx::error::ErrorKind::ForeignKeyViolation => {
                    return AppError::Conflict(
                        "Operation violates a relationship constraint (referenced row missing or still in use)"
                            .to_string(),
                    );
                }
                sqlx::error::ErrorKind::CheckViolation => {
                    return AppError::Conflict(db.message().to_string());
                }
                _ => {}
            }
        }
        AppError::Database(err)
    }
}

impl From<CapacityError> for AppError {
    fn from(err: CapacityError) -> Self {
        match err {
            CapacityError::ShelfNotFound(_) | CapacityError::MediaNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            CapacityError::CannotAccommodate { .. } => AppError::Conflict(err.to_string()),
            CapacityError::Database(e) => AppError::from(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
