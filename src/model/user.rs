use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile of the currently logged in user, fetched fresh from the upstream
/// user-management API on every page load that needs it.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Non-sensitive site preferences stored in the unsigned `user-preferences`
/// cookie.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferencesDto {
    pub sidebar_enabled: bool,
    pub darkmode_enabled: bool,
}
