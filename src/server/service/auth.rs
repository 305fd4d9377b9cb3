//! Authentication service layer.
//!
//! Thin wrappers over the upstream API's login and logout endpoints; all field
//! validation happens before these are called.

use crate::server::{error::Error, service::upstream::UserApiClient};

/// Attempt a password login upstream and return the issued session token.
pub async fn login_service(api: &UserApiClient, email: &str, password: &str) -> Result<String, Error> {
    let token = api.login_password(email, password).await?;

    Ok(token)
}

/// Invalidate the upstream session for `token`.
///
/// Errors propagate unchanged so the caller leaves the local session cookie
/// untouched when the upstream refuses the logout.
pub async fn logout_service(api: &UserApiClient, token: &str) -> Result<(), Error> {
    api.logout(token).await
}
