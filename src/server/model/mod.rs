//! Server-side data models.
//!
//! Application state, cookie-backed session and preference models, and form
//! payloads with their field-level validation rules.

pub mod app;
pub mod form;
pub mod preferences;
pub mod session;
