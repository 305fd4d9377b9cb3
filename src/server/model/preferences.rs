//! Unsigned `user-preferences` cookie model.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{model::user::UserPreferencesDto, server::error::Error};

/// Name of the unsigned preferences cookie.
pub const PREFERENCES_COOKIE: &str = "user-preferences";

/// Non-sensitive per-browser site preferences.
///
/// Stored as base64-encoded JSON in an unsigned cookie with a one-week
/// expiry; raw JSON contains quotes and commas, which are not valid
/// cookie-octets. A missing or malformed cookie parses as the defaults.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// Whether the navigation sidebar is expanded.
    pub sidebar_enabled: bool,
    /// Whether dark mode is active.
    pub darkmode_enabled: bool,
}

impl UserPreferences {
    /// Read preferences from the cookie jar, defaulting on any parse failure.
    pub fn from_jar(jar: &CookieJar) -> Self {
        jar.get(PREFERENCES_COOKIE)
            .and_then(|cookie| STANDARD.decode(cookie.value()).ok())
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }

    /// Serialize preferences back into the jar with a one-week expiry.
    pub fn commit(&self, jar: CookieJar) -> Result<CookieJar, Error> {
        let payload = STANDARD.encode(serde_json::to_string(self)?);

        let cookie = Cookie::build((PREFERENCES_COOKIE, payload))
            .path("/")
            .max_age(Duration::weeks(1))
            .build();

        Ok(jar.add(cookie))
    }
}

impl From<UserPreferences> for UserPreferencesDto {
    fn from(prefs: UserPreferences) -> Self {
        Self {
            sidebar_enabled: prefs.sidebar_enabled,
            darkmode_enabled: prefs.darkmode_enabled,
        }
    }
}
