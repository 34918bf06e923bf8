//! Unified error handling
//!
//! Provides the application error type and its HTTP mapping:
//! - [`AppError`] - application error enum
//! - [`AppResult`] - handler result alias
//!
//! # Taxonomy
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | Validation | 400 | the validation message |
//! | NotFound | 404 | `not found` |
//! | Processor | 500 | generic message, detail logged |
//! | Storage | 500 | generic message, detail logged |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;
use crate::db::store::StoreError;
use crate::services::payment::ProcessorError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed required field (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown staff id or token (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// External payment-session creation failed (500)
    ///
    /// Carries the full processor detail for the server-side log; the
    /// HTTP body never includes it.
    #[error("Payment processor error: {0}")]
    Processor(String),

    /// Persistence medium failure (500)
    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not found".to_string()),

            AppError::Processor(detail) => {
                error!(target: "payment", error = %detail, "Payment processor error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "payment processor error".to_string(),
                )
            }

            AppError::Storage(detail) => {
                error!(target: "storage", error = %detail, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        let body = ErrorResponse { error: message };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Storage(e.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Storage(err) => AppError::Storage(err.to_string()),
        }
    }
}

impl From<ProcessorError> for AppError {
    fn from(e: ProcessorError) -> Self {
        AppError::Processor(e.to_string())
    }
}

/// Application-level Result type
///
/// Used in HTTP handlers and application logic
pub type AppResult<T> = Result<T, AppError>;
