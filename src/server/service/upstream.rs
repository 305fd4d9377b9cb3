//! Client for the upstream user-management HTTP API.

use axum_extra::extract::cookie::Cookie;
use chrono::{DateTime, Utc};
use reqwest::header::{COOKIE, SET_COOKIE};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    model::user::UserProfileDto,
    server::{
        error::{upstream::UpstreamError, Error},
        model::session::SESSION_TOKEN_KEY,
    },
};

/// User profile as the upstream API serializes it (snake_case fields).
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    /// Upstream user id.
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Avatar image URL, if one has been uploaded.
    pub avatar_url: Option<String>,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserProfileDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            avatar_url: profile.avatar_url,
            created_at: profile.created_at,
        }
    }
}

/// Body of an upstream `PUT /users/{id}` request.
///
/// The `updateType` discriminator and camelCase field names are part of the
/// upstream wire contract.
#[derive(Debug, Serialize)]
#[serde(tag = "updateType", rename_all = "camelCase")]
pub enum UserUpdate {
    /// Update profile fields.
    #[serde(rename_all = "camelCase")]
    UpdateInformation {
        /// New first name.
        first_name: String,
        /// New last name.
        last_name: String,
        /// New email address.
        email: String,
    },
    /// Change the account password.
    #[serde(rename_all = "camelCase")]
    UpdatePassword {
        /// Current password, verified upstream.
        current_password: String,
        /// Desired new password.
        new_password: String,
        /// Confirmation of the new password.
        confirm_new_password: String,
    },
}

/// Message-bearing body returned by upstream update and error responses.
#[derive(Debug, Deserialize)]
struct UpstreamMessage {
    message: String,
}

/// HTTP client for the upstream user-management API.
///
/// Every non-200 response becomes a typed [`UpstreamError::Status`] carrying
/// the upstream `message`; response bodies are never mapped without checking
/// the status first. No timeout is applied to upstream calls.
#[derive(Clone)]
pub struct UserApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserApiClient {
    /// Create a client for the API at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `POST /auth/login/password`; on success, extract the session token from
    /// the `Set-Cookie` header the upstream answers with.
    pub async fn login_password(&self, email: &str, password: &str) -> Result<String, Error> {
        let response = self
            .http
            .post(format!("{}/auth/login/password", self.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Self::status_error(response).await);
        }

        let mut set_cookie_seen = false;
        for value in response.headers().get_all(SET_COOKIE) {
            set_cookie_seen = true;

            let Ok(raw) = value.to_str() else { continue };
            if let Ok(cookie) = Cookie::parse(raw) {
                if cookie.name() == SESSION_TOKEN_KEY {
                    return Ok(cookie.value().to_string());
                }
            }
        }

        if set_cookie_seen {
            Err(UpstreamError::MissingSessionCookie.into())
        } else {
            Err(UpstreamError::MissingSetCookie.into())
        }
    }

    /// `DELETE /auth/logout`, with the session token forwarded as a cookie.
    pub async fn logout(&self, token: &str) -> Result<(), Error> {
        let response = self
            .http
            .delete(format!("{}/auth/logout", self.base_url))
            .header(COOKIE, format!("{}={}", SESSION_TOKEN_KEY, token))
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Self::status_error(response).await);
        }

        Ok(())
    }

    /// `GET /users/session/user`: resolve the session token into the profile
    /// of the currently logged in user.
    pub async fn session_user(&self, token: &str) -> Result<UserProfile, Error> {
        let response = self
            .http
            .get(format!("{}/users/session/user", self.base_url))
            .header(COOKIE, format!("{}={}", SESSION_TOKEN_KEY, token))
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Self::status_error(response).await);
        }

        Ok(response.json::<UserProfile>().await?)
    }

    /// `PUT /users/{id}` with an [`UserUpdate`] body; returns the upstream
    /// status message.
    pub async fn update_user(
        &self,
        token: &str,
        user_id: &str,
        update: UserUpdate,
    ) -> Result<String, Error> {
        let response = self
            .http
            .put(format!("{}/users/{}", self.base_url, user_id))
            .header(COOKIE, format!("{}={}", SESSION_TOKEN_KEY, token))
            .json(&update)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Self::status_error(response).await);
        }

        let body = response.json::<UpstreamMessage>().await?;

        Ok(body.message)
    }

    /// Turn a non-200 response into a typed error carrying the upstream
    /// `message` field, with a fallback when the body is not JSON.
    async fn status_error(response: reqwest::Response) -> Error {
        let status = response.status().as_u16();

        let message = response
            .json::<UpstreamMessage>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| "Upstream request failed".to_string());

        UpstreamError::Status { status, message }.into()
    }
}
