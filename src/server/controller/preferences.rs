//! Site preference endpoints backed by the unsigned `user-preferences` cookie.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::{
    model::user::UserPreferencesDto,
    server::{error::Error, model::preferences::UserPreferences},
};

/// OpenAPI tag for site preference routes.
pub static PREFERENCES_TAG: &str = "preferences";

/// Toggle action submitted by the sidebar and dark-mode buttons.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct PreferencesForm {
    /// Which preference to flip: `sidebarToggle` or `darkmodeToggle`.
    #[serde(rename = "_action")]
    pub action: String,
}

/// Get the current site preferences
///
/// Missing or malformed cookies read as the defaults.
#[utoipa::path(
    get,
    path = "/api/preferences",
    tag = PREFERENCES_TAG,
    responses(
        (status = 200, description = "Current preferences", body = UserPreferencesDto),
    ),
)]
pub async fn get_preferences(jar: CookieJar) -> Json<UserPreferencesDto> {
    Json(UserPreferences::from_jar(&jar).into())
}

/// Toggle a site preference
///
/// Flips the flag named by `_action` and re-issues the preferences cookie with
/// a one-week expiry. Unknown actions leave the flags unchanged, matching the
/// page's fall-through behavior.
///
/// # Responses
/// - 200 (OK): Updated preferences, with the cookie re-issued
#[utoipa::path(
    post,
    path = "/api/preferences",
    tag = PREFERENCES_TAG,
    request_body(content = PreferencesForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Updated preferences", body = UserPreferencesDto),
    ),
)]
pub async fn toggle_preferences(
    jar: CookieJar,
    Form(form): Form<PreferencesForm>,
) -> Result<Response, Error> {
    let mut prefs = UserPreferences::from_jar(&jar);

    match form.action.as_str() {
        "sidebarToggle" => prefs.sidebar_enabled = !prefs.sidebar_enabled,
        "darkmodeToggle" => prefs.darkmode_enabled = !prefs.darkmode_enabled,
        _ => {}
    }

    let jar = prefs.commit(jar)?;
    let dto: UserPreferencesDto = prefs.into();

    Ok((StatusCode::OK, jar, Json(dto)).into_response())
}
