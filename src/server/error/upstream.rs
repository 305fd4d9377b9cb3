//! Upstream user-management API errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Errors raised while talking to the upstream user-management API.
///
/// Every non-200 upstream response becomes a `Status` value carrying the
/// upstream's `message` field; nothing downstream ever maps the body of a
/// failed response as if it had succeeded.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The upstream API answered with a non-200 status.
    #[error("Upstream API returned status {status}: {message}")]
    Status {
        /// HTTP status code the upstream answered with.
        status: u16,
        /// Message extracted from the upstream response body.
        message: String,
    },
    /// A successful login response arrived without any `Set-Cookie` header.
    #[error("Upstream login response did not include a Set-Cookie header")]
    MissingSetCookie,
    /// A successful login response set cookies, but none held the session id.
    #[error("Upstream login response did not include a session id cookie")]
    MissingSessionCookie,
}

/// Non-200 upstream responses surface the upstream message to the user as a
/// 502; malformed login responses are internal errors with a generic body.
impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match self {
            Self::Status { status, message } => {
                tracing::warn!(status = %status, "Upstream API request failed: {}", message);

                (StatusCode::BAD_GATEWAY, Json(ErrorDto { error: message })).into_response()
            }
            Self::MissingSetCookie | Self::MissingSessionCookie => {
                InternalServerError(self).into_response()
            }
        }
    }
}
