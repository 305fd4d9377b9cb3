//! User profile service layer.

use crate::server::{
    error::Error,
    model::form::{UpdateInformationForm, UpdatePasswordForm},
    service::upstream::{UserApiClient, UserProfile, UserUpdate},
};

/// Fetch the profile of the user the session token belongs to.
///
/// The profile is fetched fresh from upstream on every call; nothing is cached
/// locally.
pub async fn session_user_service(api: &UserApiClient, token: &str) -> Result<UserProfile, Error> {
    api.session_user(token).await
}

/// Proxy a profile information update upstream, returning the upstream status
/// message.
pub async fn update_information_service(
    api: &UserApiClient,
    token: &str,
    form: &UpdateInformationForm,
) -> Result<String, Error> {
    api.update_user(
        token,
        &form.uuid,
        UserUpdate::UpdateInformation {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
        },
    )
    .await
}

/// Proxy a password change upstream, returning the upstream status message.
pub async fn update_password_service(
    api: &UserApiClient,
    token: &str,
    form: &UpdatePasswordForm,
) -> Result<String, Error> {
    api.update_user(
        token,
        &form.uuid,
        UserUpdate::UpdatePassword {
            current_password: form.current_password.clone(),
            new_password: form.new_password.clone(),
            confirm_new_password: form.confirm_new_password.clone(),
        },
    )
    .await
}
