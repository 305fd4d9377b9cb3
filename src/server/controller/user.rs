//! User profile endpoints: current-user loader and update actions.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use axum_extra::extract::cookie::PrivateCookieJar;

use crate::{
    model::{
        api::{ErrorDto, FormErrorsDto, MessageDto},
        user::UserProfileDto,
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            form::{UpdateInformationForm, UpdatePasswordForm},
            session::Session,
        },
        service::user::{update_information_service, update_password_service},
    },
};

/// OpenAPI tag for user profile routes.
pub static USER_TAG: &str = "user";

/// Get the currently logged in user
///
/// Loader for the settings and logout pages: resolves the session token into
/// the user's profile via the upstream API. The profile is fetched fresh on
/// every call.
///
/// # Responses
/// - 200 (OK): Profile of the currently logged in user
/// - 307 (Temporary Redirect): No session token, redirect to `/login`
/// - 502 (Bad Gateway): Upstream profile fetch failed
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user profile", body = UserProfileDto),
        (status = 307, description = "Not logged in, redirect to login"),
        (status = 502, description = "Upstream profile fetch failure", body = ErrorDto),
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &jar).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Update the current user's profile information
///
/// # Responses
/// - 200 (OK): Updated; carries the upstream status message
/// - 307 (Temporary Redirect): No session token, redirect to `/login`
/// - 422 (Unprocessable Entity): Field validation failed; no upstream call was made
/// - 502 (Bad Gateway): Upstream update failed; its message is surfaced
#[utoipa::path(
    post,
    path = "/api/user/information",
    tag = USER_TAG,
    request_body(content = UpdateInformationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Profile updated", body = MessageDto),
        (status = 307, description = "Not logged in, redirect to login"),
        (status = 422, description = "Field validation failed", body = FormErrorsDto),
        (status = 502, description = "Upstream update failure", body = ErrorDto),
    ),
)]
pub async fn update_information(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<UpdateInformationForm>,
) -> Result<Response, Error> {
    // Session first so unauthenticated requests redirect regardless of
    // form contents, matching the profile loader.
    let session = Session::from_jar(&jar);
    let token = session.token().ok_or(AuthError::Unauthenticated)?;

    let errors = form.validate();
    if !errors.is_empty() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(FormErrorsDto { errors })).into_response());
    }

    let message = update_information_service(&state.user_api, token, &form).await?;

    Ok((StatusCode::OK, Json(MessageDto { message })).into_response())
}

/// Change the current user's password
///
/// # Responses
/// - 200 (OK): Password changed; carries the upstream status message
/// - 307 (Temporary Redirect): No session token, redirect to `/login`
/// - 422 (Unprocessable Entity): Field validation failed; no upstream call was made
/// - 502 (Bad Gateway): Upstream update failed; its message is surfaced
#[utoipa::path(
    post,
    path = "/api/user/password",
    tag = USER_TAG,
    request_body(content = UpdatePasswordForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 307, description = "Not logged in, redirect to login"),
        (status = 422, description = "Field validation failed", body = FormErrorsDto),
        (status = 502, description = "Upstream update failure", body = ErrorDto),
    ),
)]
pub async fn update_password(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<UpdatePasswordForm>,
) -> Result<Response, Error> {
    let session = Session::from_jar(&jar);
    let token = session.token().ok_or(AuthError::Unauthenticated)?;

    let errors = form.validate();
    if !errors.is_empty() {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(FormErrorsDto { errors })).into_response());
    }

    let message = update_password_service(&state.user_api, token, &form).await?;

    Ok((StatusCode::OK, Json(MessageDto { message })).into_response())
}
