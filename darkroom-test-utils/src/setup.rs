use axum_extra::extract::cookie::Key;
use mockito::{Mock, Server, ServerGuard};

use crate::constant::TEST_SESSION_SECRET;

/// Shared test environment: a mock upstream user-management API plus the
/// cookie key the application under test signs sessions with.
pub struct TestSetup {
    /// Mock HTTP server standing in for the upstream user-management API.
    pub server: ServerGuard,
    /// Private-cookie key derived from the test session secret.
    pub key: Key,
    /// Mock endpoints registered during the test, for batch assertion.
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let key = Key::derive_from(TEST_SESSION_SECRET.as_bytes());

        TestSetup {
            server,
            key,
            mocks: Vec::new(),
        }
    }

    /// Convert the mock API URL and cookie key into any type constructible
    /// from them. This allows conversion to the application's `AppState`
    /// without creating a circular dependency on the darkroom crate.
    ///
    /// # Example
    /// ```ignore
    /// let state: AppState = test.state();
    /// ```
    pub fn state<T>(&self) -> T
    where
        T: From<(String, Key)>,
    {
        T::from((self.server.url(), self.key.clone()))
    }

    /// Assert all registered mock endpoints were called as expected.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
