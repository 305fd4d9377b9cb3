use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Form,
};

use darkroom::server::{
    controller::auth::{login, login_page},
    error::Error,
    model::{form::LoginForm, session::Session},
};
use darkroom_test_utils::prelude::*;

use crate::util::{body_json, jar_from_response, TestSetupExt};

fn login_form(email: &str, password: &str) -> Form<LoginForm> {
    Form(LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect a field error and no upstream call for an email without '@'
async fn returns_field_error_for_invalid_email() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/auth/login/password")
        .expect(0)
        .create_async()
        .await;

    let response = login(
        State(test.app_state()),
        test.empty_jar(),
        HeaderMap::new(),
        login_form("not-an-email", "a_long_enough_password"),
    )
    .await?;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["errors"]["email"], "Invalid email address");

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect a field error and no upstream call for a password under 12 characters
async fn returns_field_error_for_short_password() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/auth/login/password")
        .expect(0)
        .create_async()
        .await;

    let response = login(
        State(test.app_state()),
        test.empty_jar(),
        HeaderMap::new(),
        login_form("a@b.com", "short"),
    )
    .await?;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(
        body["errors"]["password"],
        "Password should be at least 12 characters"
    );

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect the upstream-issued token to land in the session cookie on success
async fn commits_session_token_and_redirects_on_success() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/auth/login/password")
        .with_status(200)
        .with_header("set-cookie", "connect.sid=XYZ; Path=/; HttpOnly")
        .with_body(fixtures::message_body("ok").to_string())
        .create_async()
        .await;

    let response = login(
        State(test.app_state()),
        test.empty_jar(),
        HeaderMap::new(),
        login_form("a@b.com", "a_long_enough_password"),
    )
    .await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION),
        Some(&HeaderValue::from_static("/"))
    );

    let jar = jar_from_response(&response, &test.key);
    let session = Session::from_jar(&jar);
    assert_eq!(session.token(), Some("XYZ"));

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect a successful login to redirect back to the referring page
async fn redirects_to_referer_when_present() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let _mock = test
        .server
        .mock("POST", "/auth/login/password")
        .with_status(200)
        .with_header("set-cookie", "connect.sid=XYZ; Path=/; HttpOnly")
        .create_async()
        .await;

    let mut headers = HeaderMap::new();
    headers.insert(header::REFERER, HeaderValue::from_static("/settings"));

    let response = login(
        State(test.app_state()),
        test.empty_jar(),
        headers,
        login_form("a@b.com", "a_long_enough_password"),
    )
    .await?;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION),
        Some(&HeaderValue::from_static("/settings"))
    );

    Ok(())
}

#[tokio::test]
/// Expect a 502 carrying the upstream message when credentials are rejected
async fn surfaces_upstream_message_on_rejected_login() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("POST", "/auth/login/password")
        .with_status(401)
        .with_body(fixtures::message_body("Invalid credentials").to_string())
        .create_async()
        .await;

    let result = login(
        State(test.app_state()),
        test.empty_jar(),
        HeaderMap::new(),
        login_form("a@b.com", "a_long_enough_password"),
    )
    .await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid credentials");

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect the login page loader to redirect users who are already logged in
async fn login_page_redirects_active_sessions() -> Result<(), Error> {
    let test = TestSetup::new().await;

    let response = login_page(test.jar_with_token(TEST_SESSION_TOKEN)?).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION),
        Some(&HeaderValue::from_static("/"))
    );

    Ok(())
}

#[tokio::test]
/// Expect the login page loader to return no content without a session
async fn login_page_returns_no_content_without_session() {
    let test = TestSetup::new().await;

    let response = login_page(test.empty_jar()).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
