//! Environment-driven application configuration.

use crate::server::error::config::ConfigError;

/// Process-wide configuration, read once at startup.
pub struct Config {
    /// Base URL of the upstream user-management API.
    pub api_url: String,
    /// Secret the session cookie key is derived from. Injected explicitly at
    /// startup rather than read from a hidden global.
    pub api_session_secret: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment. `API_URL` and
    /// `API_SESSION_SECRET` are required; `PORT` defaults to 8080.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: require_var("API_URL")?,
            api_session_secret: require_var("API_SESSION_SECRET")?,
            port: match std::env::var("PORT") {
                Ok(value) => value.parse().map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: format!("{}", e),
                })?,
                Err(_) => 8080,
            },
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
