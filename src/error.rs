//! Domain error type shared by the engines, query modules and handlers.
//!
//! Every variant maps onto one HTTP status through `ResponseError`, so
//! handlers can simply `?` their way out and the transaction they hold is
//! rolled back on drop.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::models::common::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Missing, malformed or contradictory input.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Uniqueness or at-most-one-per-entity violation.
    #[error("{0}")]
    Conflict(String),

    /// Authenticated, but lacking admin privilege.
    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortalError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

impl From<sqlx::Error> for PortalError {
    fn from(e: sqlx::Error) -> Self {
        // Constraint races that slip past the explicit existence checks
        if let Some(db_error) = e.as_database_error() {
            if db_error.is_unique_violation() {
                return Self::Conflict("Record already exists".to_string());
            }
        }
        Self::Database(e)
    }
}

impl From<bcrypt::BcryptError> for PortalError {
    fn from(e: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("Password hashing failed: {}", e))
    }
}

impl ResponseError for PortalError {
    fn status_code(&self) -> StatusCode {
        match self {
            PortalError::Validation(_) => StatusCode::BAD_REQUEST,
            PortalError::NotFound(_) => StatusCode::NOT_FOUND,
            PortalError::Conflict(_) => StatusCode::CONFLICT,
            PortalError::Authorization(_) => StatusCode::FORBIDDEN,
            PortalError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            PortalError::Database(_) | PortalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            PortalError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            PortalError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(message))
    }
}

pub type PortalResult<T> = Result<T, PortalError>;
