// Error handling framework

use axum::http::StatusCode;
use thiserror::Error;

/// Database-specific errors
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) => DatabaseError::QueryFailed(db_err.message().to_string()),
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

/// Application error surfaced at the HTTP boundary.
///
/// A closed set of error kinds, each carrying a stable machine-readable code.
/// Raw database failures are wrapped as `Internal` and their detail is only
/// ever logged, never serialized to a client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid post id: {0}")]
    InvalidId(String),

    #[error("Invalid request body: {0}")]
    InvalidInput(String),

    #[error("No ids provided")]
    MissingIds,

    #[error("Post not found: {0}")]
    NotFound(i32),

    #[error("Internal error: {0}")]
    Internal(#[from] DatabaseError),
}

impl AppError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidId(_) => "INVALID_ID",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::MissingIds => "MISSING_IDS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidId(_) | AppError::InvalidInput(_) | AppError::MissingIds => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to a client. Internal failures are genericized.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
