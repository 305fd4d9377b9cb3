//! HTTP controller endpoints for the darkroom web API.
//!
//! This module contains Axum handlers for authentication, user profile
//! management, and site preferences. Controllers parse and validate requests,
//! delegate to services, and translate results into HTTP responses and cookie
//! updates. Each endpoint is documented with utoipa for the OpenAPI spec.

pub mod auth;
pub mod preferences;
pub mod user;
pub mod util;
