use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    Form,
};
use mockito::Matcher;
use serde_json::json;

use darkroom::server::{
    controller::user::update_information, error::Error, model::form::UpdateInformationForm,
};
use darkroom_test_utils::prelude::*;

use crate::util::{body_json, TestSetupExt};

fn information_form(email: &str) -> Form<UpdateInformationForm> {
    Form(UpdateInformationForm {
        uuid: "u-1".to_string(),
        first_name: "Ansel".to_string(),
        last_name: "Adams".to_string(),
        email: email.to_string(),
    })
}

#[tokio::test]
/// Expect a field error and no upstream call for an invalid email
async fn returns_field_error_for_invalid_email() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("PUT", "/users/u-1")
        .expect(0)
        .create_async()
        .await;

    let response = update_information(
        State(test.app_state()),
        test.jar_with_token(TEST_SESSION_TOKEN)?,
        information_form("broken"),
    )
    .await?;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["errors"]["email"], "Invalid email address");

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect a redirect to login when no session token is present
async fn redirects_to_login_without_session() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("PUT", "/users/u-1")
        .expect(0)
        .create_async()
        .await;

    let result = update_information(
        State(test.app_state()),
        test.empty_jar(),
        information_form("ansel@example.com"),
    )
    .await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION),
        Some(&HeaderValue::from_static("/login"))
    );

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect a redirect to login without a session even when the form is invalid
async fn redirects_to_login_without_session_for_invalid_form() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("PUT", "/users/u-1")
        .expect(0)
        .create_async()
        .await;

    let result = update_information(
        State(test.app_state()),
        test.empty_jar(),
        information_form("broken"),
    )
    .await;

    assert!(result.is_err());
    let response = result.unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION),
        Some(&HeaderValue::from_static("/login"))
    );

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect the update proxied upstream with the updateType discriminator
async fn proxies_information_update_upstream() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test
        .server
        .mock("PUT", "/users/u-1")
        .match_body(Matcher::Json(json!({
            "updateType": "updateInformation",
            "firstName": "Ansel",
            "lastName": "Adams",
            "email": "ansel@example.com",
        })))
        .with_status(200)
        .with_body(fixtures::message_body("Profile updated").to_string())
        .create_async()
        .await;

    let response = update_information(
        State(test.app_state()),
        test.jar_with_token(TEST_SESSION_TOKEN)?,
        information_form("ansel@example.com"),
    )
    .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Profile updated");

    mock.assert_async().await;

    Ok(())
}
