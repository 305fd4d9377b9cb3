//! Authentication errors.

use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

/// Errors raised when a request cannot be tied to a logged-in user.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No upstream session token is present in the session cookie.
    #[error("No session token present in session cookie")]
    Unauthenticated,
}

/// Session absence is an authorization failure, not an error page: the caller
/// is redirected to the login page instead.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated => {
                tracing::debug!("{}", Self::Unauthenticated);

                Redirect::temporary("/login").into_response()
            }
        }
    }
}
