//! Test configuration constants shared across darkroom tests.
//!
//! None of these values are real credentials; they exist so every test derives
//! the same cookie key and uses the same placeholder session token.

/// Session secret used to derive the private-cookie key in tests.
///
/// Long enough for key derivation; never used outside of test runs.
pub static TEST_SESSION_SECRET: &str = "test_session_secret_test_session_secret_test";

/// Placeholder upstream session token, standing in for a `connect.sid` value
/// issued by the user-management API.
pub static TEST_SESSION_TOKEN: &str = "s%3Atest-session-token";
