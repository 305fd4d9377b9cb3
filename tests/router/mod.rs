//! End-to-end tests through the full router, exercising route registration,
//! cookie key extraction from state, and form deserialization.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

use darkroom::server::router::routes;
use darkroom_test_utils::prelude::*;

use crate::util::TestSetupExt;

#[tokio::test]
/// Expect an invalid login form rejected by the router without an upstream call
async fn router_rejects_invalid_login_form() {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/auth/login/password")
        .expect(0)
        .create_async()
        .await;
    test.mocks.push(mock);

    let app = routes().with_state(test.app_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from("email=a%40b.com&password=short"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    test.assert_mocks();
}

#[tokio::test]
/// Expect a full login through the router to set the session cookie
async fn router_login_sets_session_cookie() {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/auth/login/password")
        .with_status(200)
        .with_header("set-cookie", "connect.sid=XYZ; Path=/; HttpOnly")
        .create_async()
        .await;
    test.mocks.push(mock);

    let app = routes().with_state(test.app_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(
                    "email=a%40b.com&password=a_long_enough_password",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie was not set")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("__session="));

    test.assert_mocks();
}

#[tokio::test]
/// Expect an unauthenticated profile request redirected to the login page
async fn router_redirects_unauthenticated_profile_request() {
    let test = TestSetup::new().await;

    let app = routes().with_state(test.app_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/user")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some("/login")
    );
}
