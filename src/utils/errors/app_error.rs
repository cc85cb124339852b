use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::error_payload::ErrorPayload;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller-supplied input is structurally invalid. Raised before
    /// any I/O is attempted.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity does not exist. Also covers ownership
    /// mismatches and updates that raced a concurrent delete; all
    /// three surface as the same kind.
    #[error("{0}")]
    NotFound(String),

    /// Reserved for uniqueness violations; no current use-case
    /// raises it.
    #[error("{0}")]
    AlreadyExists(String),

    #[error("An error occurred while accessing the database")]
    DatabaseError(#[from] sqlx::Error),
}

impl AppError {
    pub fn code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> String {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
        .to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.code();
        let error_response = ErrorPayload {
            message: self.to_string(),
            code: status.as_u16(),
            r#type: self.error_type(),
            details: None,
        };

        (status, Json(error_response)).into_response()
    }
}
