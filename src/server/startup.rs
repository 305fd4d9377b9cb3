//! Construction of long-lived resources at startup.

use axum_extra::extract::cookie::Key;
use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    service::upstream::UserApiClient,
};

/// Build the HTTP client for the upstream user-management API.
pub fn build_api_client(config: &Config) -> UserApiClient {
    UserApiClient::new(&config.api_url)
}

/// Derive the private-cookie key from the configured session secret.
///
/// The secret is injected explicitly here rather than read from a global; the
/// derived key travels inside `AppState`.
pub fn session_key(config: &Config) -> Result<Key, Error> {
    // Key derivation requires at least 32 bytes of input material.
    if config.api_session_secret.len() < 32 {
        return Err(ConfigError::InvalidEnvValue {
            var: "API_SESSION_SECRET".to_string(),
            reason: "must be at least 32 bytes".to_string(),
        }
        .into());
    }

    Ok(Key::derive_from(config.api_session_secret.as_bytes()))
}

/// Bind the TCP listener for the configured port.
pub async fn bind_listener(config: &Config) -> Result<TcpListener, Error> {
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    Ok(listener)
}
