//! Authentication endpoints: login and logout.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::PrivateCookieJar;

use crate::{
    model::api::{ErrorDto, FormErrorsDto},
    server::{
        error::Error,
        model::{app::AppState, form::LoginForm, session::Session},
        service::auth::{login_service, logout_service},
    },
};

/// OpenAPI tag for authentication routes.
pub static AUTH_TAG: &str = "auth";

/// Login page loader
///
/// Users who already hold a session token are sent back to the home page
/// instead of seeing the login form again.
///
/// # Responses
/// - 204 (No Content): No active session, the login form should be shown
/// - 307 (Temporary Redirect): Already logged in, redirect to `/`
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "No active session"),
        (status = 307, description = "Already logged in, redirect to home"),
    ),
)]
pub async fn login_page(jar: PrivateCookieJar) -> Response {
    if Session::from_jar(&jar).token().is_some() {
        return Redirect::temporary("/").into_response();
    }

    StatusCode::NO_CONTENT.into_response()
}

/// Login with email and password
///
/// Validates the submitted fields locally, then attempts the login against the
/// upstream user-management API. On success the upstream-issued session token
/// is committed into the signed session cookie.
///
/// # Responses
/// - 307 (Temporary Redirect): Logged in; redirects to the referring page or `/`
/// - 422 (Unprocessable Entity): Field validation failed; no upstream call was made
/// - 502 (Bad Gateway): The upstream API rejected the login; its message is surfaced
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 307, description = "Logged in, redirect to referer or home"),
        (status = 422, description = "Field validation failed", body = FormErrorsDto),
        (status = 502, description = "Upstream login failure", body = ErrorDto),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Result<Response, Error> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(FormErrorsDto { errors })).into_response());
    }

    let token = login_service(&state.user_api, &form.email, &form.password).await?;

    let mut session = Session::from_jar(&jar);
    session.set_token(&token);
    let jar = session.commit(jar)?;

    let target = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/");

    Ok((jar, Redirect::temporary(target)).into_response())
}

/// Log the current user out
///
/// Invalidates the session upstream, then destroys the local session cookie.
/// When the upstream refuses the logout the cookie is left untouched so the
/// user can retry.
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out (or no session existed), redirect to `/login`
/// - 502 (Bad Gateway): Upstream logout failed; session cookie unchanged
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to login"),
        (status = 502, description = "Upstream logout failure", body = ErrorDto),
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let session = Session::from_jar(&jar);

    // Nothing to invalidate without a token; just send the user to login.
    let Some(token) = session.token() else {
        return Ok(Redirect::temporary("/login").into_response());
    };

    logout_service(&state.user_api, token).await?;

    let jar = Session::destroy(jar);

    Ok((jar, Redirect::temporary("/login")).into_response())
}
