use axum_extra::extract::cookie::PrivateCookieJar;

use crate::{
    model::user::UserProfileDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::Session},
        service::user::session_user_service,
    },
};

/// Retrieves the current user's profile from the session and then from the
/// upstream API.
///
/// # Arguments
/// - `state`: Application state with the upstream API client
/// - `jar`: The request's private cookie jar
///
/// # Returns
/// - `Ok(UserProfileDto)`: Profile of the currently logged in user
/// - `Err(Error::AuthError(AuthError::Unauthenticated))`: No session token; callers redirect to `/login`
/// - `Err(Error)`: Upstream failures (non-200 response, connection errors)
pub async fn get_user_from_session(
    state: &AppState,
    jar: &PrivateCookieJar,
) -> Result<UserProfileDto, Error> {
    let session = Session::from_jar(jar);

    let Some(token) = session.token() else {
        return Err(Error::AuthError(AuthError::Unauthenticated));
    };

    let user = session_user_service(&state.user_api, token).await?;

    Ok(user.into())
}
