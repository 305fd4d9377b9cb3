use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::server::service::upstream::UserApiClient;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream user-management API.
    pub user_api: UserApiClient,
    /// Key the `__session` cookie is signed and encrypted with.
    pub session_key: Key,
}

/// Lets `PrivateCookieJar` extract its key straight from application state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.session_key.clone()
    }
}

/// Construct state from an upstream base URL and cookie key.
///
/// Exists so test setup can build an `AppState` without a circular dependency
/// on the test-utils crate.
impl From<(String, Key)> for AppState {
    fn from((api_url, session_key): (String, Key)) -> Self {
        Self {
            user_api: UserApiClient::new(&api_url),
            session_key,
        }
    }
}
