//! Error types for the darkroom server application.
//!
//! This module provides the error handling system with specialized error types
//! for each domain (authentication, configuration, upstream API). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait
//! implementations.

pub mod auth;
pub mod config;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, upstream::UpstreamError},
};

/// Main error type for the darkroom server application.
///
/// Aggregates all domain-specific error types and external library errors into
/// a single unified error type. `thiserror`'s `#[from]` attribute enables
/// automatic conversion from underlying error types via the `?` operator, and
/// the `IntoResponse` implementation maps errors to appropriate HTTP responses.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (missing session token)
/// - Upstream errors (non-200 responses, malformed login responses)
/// - External library errors (HTTP client, serialization, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no session token present).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Upstream user-management API error.
    #[error(transparent)]
    UpstreamError(#[from] UpstreamError),
    /// HTTP client error (connection failures, body read failures).
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// Serialization error (session or preference cookie payloads).
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// I/O error (binding the listener at startup).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes: session
/// absence becomes a redirect to the login page, upstream failures surface the
/// upstream message, and everything else is treated as an internal server
/// error with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::UpstreamError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging but returns a generic message to
/// the client to avoid exposing internal implementation details.
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
