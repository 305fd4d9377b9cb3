//! Business logic services.
//!
//! Services sit between the HTTP controllers and the upstream user-management
//! API: controllers parse and validate requests, services perform the upstream
//! call and shape the result.

pub mod auth;
pub mod upstream;
pub mod user;
