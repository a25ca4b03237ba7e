// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::time_utils::DateParseError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type that converts to HTTP responses.
///
/// All variants render as plain-text bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("username already existed!")]
    UsernameTaken(String),

    #[error(transparent)]
    DateParse(#[from] DateParseError),

    #[error("{0}")]
    UserNotFound(&'static str),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message for an unknown `userId` on log queries.
    pub const UNKNOWN_USER_ID: &'static str = "unknown userId";
    /// Message for an unknown `userId` on exercise appends.
    pub const USER_ID_NOT_FOUND: &'static str = "userId not found!";
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::UsernameTaken(username) => {
                tracing::debug!(username = %username, "Username already registered");
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::DateParse(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::UserNotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database error".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, body).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
