//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications via
//! utoipa, and Swagger UI is served at `/api/docs` for interactive exploration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /api/auth/login` - Login page loader (redirects if already logged in)
/// - `POST /api/auth/login` - Login with email and password
/// - `POST /api/auth/logout` - Log the current user out
/// - `GET /api/user` - Get the currently logged in user's profile
/// - `POST /api/user/information` - Update profile information
/// - `POST /api/user/password` - Change the account password
/// - `GET /api/preferences` / `POST /api/preferences` - Site preference cookie
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Darkroom", description = "Portfolio site backend API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "User profile API routes"),
        (name = controller::preferences::PREFERENCES_TAG, description = "Site preference API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login_page, controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::update_information))
        .routes(routes!(controller::user::update_password))
        .routes(routes!(
            controller::preferences::get_preferences,
            controller::preferences::toggle_preferences
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
