use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use trivia_core::error::CoreError;

/// Message sent with every 404 response.
pub const NOT_FOUND_MESSAGE: &str = "resource not found";
/// Message sent with every 422 response.
pub const UNPROCESSABLE_MESSAGE: &str = "unprocessable";
/// Message sent with every 500 response.
pub const INTERNAL_MESSAGE: &str = "internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the uniform JSON error body
/// `{ "success": false, "error": <status>, "message": <text> }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trivia_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The resource is absent or the query yielded nothing.
    #[error("Resource not found")]
    NotFound,

    /// The request could not be processed. The detail is logged, never sent.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Uniform error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(CoreError::NotFound { .. }) | AppError::NotFound => {
                StatusCode::NOT_FOUND
            }
            AppError::Core(CoreError::Validation(_)) | AppError::Unprocessable(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Collapse any error into [`AppError::Unprocessable`].
    ///
    /// Used by write endpoints that report every failure as 422.
    pub fn into_unprocessable(self) -> AppError {
        match self {
            AppError::Unprocessable(_) => self,
            other => AppError::Unprocessable(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match status {
            StatusCode::NOT_FOUND => NOT_FOUND_MESSAGE,
            StatusCode::UNPROCESSABLE_ENTITY => {
                tracing::debug!(error = %self, "Unprocessable request");
                UNPROCESSABLE_MESSAGE
            }
            _ => {
                tracing::error!(error = %self, "Internal error");
                INTERNAL_MESSAGE
            }
        };

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}
