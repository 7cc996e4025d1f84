//! Error handling for the Cleanstock backend
//!
//! Maps the application error taxonomy onto HTTP responses of the shape
//! `{message, error?}`, with the optional `error` field carrying underlying
//! detail for persistence failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Access denied")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    // Input errors
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0} not found")]
    NotFound(String),

    // Business logic errors
    #[error("{0}")]
    InvalidTransition(String),

    // Persistence errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match &self {
            // The login failure message is identical for unknown email and
            // wrong password to avoid user enumeration
            AppError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, self.to_string(), None)
            }
            AppError::MissingToken => (StatusCode::UNAUTHORIZED, self.to_string(), None),
            AppError::InvalidToken => (StatusCode::FORBIDDEN, self.to_string(), None),
            AppError::Validation(_) | AppError::Conflict(_) => {
                (StatusCode::BAD_REQUEST, self.to_string(), None)
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string(), None),
            AppError::InvalidTransition(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string(), None)
            }
            // Underlying detail is passed through; acceptable for an
            // internal tool, not for a public-facing deployment
            AppError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
                Some(e.to_string()),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(msg.clone()),
            ),
        };

        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { message, error: detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failures_share_one_message() {
        // Unknown email and wrong password both map to this variant, so the
        // response cannot reveal which one occurred
        assert_eq!(
            AppError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_not_found_names_the_resource() {
        assert_eq!(
            AppError::NotFound("Product".to_string()).to_string(),
            "Product not found"
        );
    }

    #[test]
    fn test_missing_and_invalid_token_statuses() {
        assert_eq!(
            AppError::MissingToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidToken.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_conflict_maps_to_bad_request() {
        assert_eq!(
            AppError::Conflict("Email already registered".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }
}
