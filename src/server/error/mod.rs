//! Error types for the Larus server application.
//!
//! A single aggregate [`Error`] wraps the domain-specific error types and
//! external library errors, uses `thiserror` for `Display`/`Error` impls,
//! and implements `IntoResponse` so controllers can return it directly.

pub mod config;
pub mod notify;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, notify::NotifyError},
};

/// Main error type for the Larus server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Notification service error (send rejected or unreachable).
    #[error(transparent)]
    NotifyError(#[from] NotifyError),
    /// A referenced case record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// The bounded licence-number probe found no free number.
    #[error("Failed to allocate a free licence number after {0} attempts")]
    LicenceNumberExhausted(u32),
    /// Internal error indicating a bug in Larus itself.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Outbound HTTP error (postcode lookup).
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// I/O error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Missing case records map to 404; everything else is treated as an
/// internal server error with logging. A failed create therefore surfaces
/// to HTTP callers as a generic error body, never a partial object.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error but returns a generic message to the client to
/// avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
