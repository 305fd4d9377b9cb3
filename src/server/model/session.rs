//! Cookie-backed session model.
//!
//! The session is an opaque mapping of string keys to string values, currently
//! holding a single key: the upstream-issued session token. The whole mapping
//! is serialized into the signed and encrypted `__session` cookie; there is no
//! server-side session store.

use std::collections::BTreeMap;

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar};

use crate::server::error::Error;

/// Name of the signed session cookie.
pub const SESSION_COOKIE: &str = "__session";

/// Session key holding the upstream-issued session token.
pub const SESSION_TOKEN_KEY: &str = "connect.sid";

/// Session state for one request.
///
/// Created on successful login, read on every subsequent request, destroyed on
/// logout.
#[derive(Debug, Default)]
pub struct Session {
    data: BTreeMap<String, String>,
}

impl Session {
    /// Decode the session from the cookie jar.
    ///
    /// A missing cookie, an invalid signature, or an undecodable payload all
    /// yield an empty session rather than failing the request.
    pub fn from_jar(jar: &PrivateCookieJar) -> Self {
        jar.get(SESSION_COOKIE)
            .and_then(|cookie| serde_json::from_str(cookie.value()).ok())
            .map(|data| Session { data })
            .unwrap_or_default()
    }

    /// Upstream session token, if present.
    pub fn token(&self) -> Option<&str> {
        self.data.get(SESSION_TOKEN_KEY).map(String::as_str)
    }

    /// Store the upstream session token.
    pub fn set_token(&mut self, token: &str) {
        self.data
            .insert(SESSION_TOKEN_KEY.to_string(), token.to_string());
    }

    /// Serialize the session into the jar as the `__session` cookie.
    pub fn commit(self, jar: PrivateCookieJar) -> Result<PrivateCookieJar, Error> {
        let payload = serde_json::to_string(&self.data)?;

        // Secure is disabled only in debug builds.
        let cookie = Cookie::build((SESSION_COOKIE, payload))
            .path("/")
            .http_only(true)
            .secure(!cfg!(debug_assertions))
            .build();

        Ok(jar.add(cookie))
    }

    /// Remove the session cookie from the jar.
    pub fn destroy(jar: PrivateCookieJar) -> PrivateCookieJar {
        jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build())
    }
}
