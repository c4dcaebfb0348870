//! Error types for Lendhub server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Item not available: {0}")]
    ItemNotAvailable(String),

    #[error("Booking own item: {0}")]
    OwnItemBooking(String),

    #[error("Invalid booking dates: {0}")]
    InvalidDate(String),

    #[error("Not the owner: {0}")]
    NotOwner(String),

    #[error("Not visible to this user: {0}")]
    NotAllowed(String),

    #[error("Email already in use: {0}")]
    NotUniqueEmail(String),

    #[error("No completed booking: {0}")]
    NotBooker(String),

    #[error("Unknown state: {0}")]
    UnsupportedState(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NotFound", msg.clone()),
            AppError::ItemNotAvailable(msg) => {
                (StatusCode::BAD_REQUEST, "ItemNotAvailable", msg.clone())
            }
            // Booking your own item and peeking at a booking you are not a
            // party to both answer 404: the resource is hidden, not refused.
            AppError::OwnItemBooking(msg) => (StatusCode::NOT_FOUND, "OwnItemBooking", msg.clone()),
            AppError::NotAllowed(msg) => (StatusCode::NOT_FOUND, "NotAllowed", msg.clone()),
            AppError::InvalidDate(msg) => (StatusCode::BAD_REQUEST, "InvalidDate", msg.clone()),
            AppError::NotOwner(msg) => (StatusCode::FORBIDDEN, "NotOwner", msg.clone()),
            AppError::NotUniqueEmail(msg) => (StatusCode::CONFLICT, "NotUniqueEmail", msg.clone()),
            AppError::NotBooker(msg) => (StatusCode::BAD_REQUEST, "NotBooker", msg.clone()),
            AppError::UnsupportedState(msg) => (
                StatusCode::BAD_REQUEST,
                "UnsupportedState",
                format!("Unknown state: {}", msg),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "Validation", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database",
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: kind.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
