//! Server application core modules.
//!
//! This module contains all server-side functionality for the darkroom
//! application, including HTTP routing, cookie-backed sessions, form
//! validation, and proxying to the external user-management API. The site's
//! pages are thin clients; every state transition (login, logout, profile
//! updates, preference toggles) runs through the handlers defined here.

#![warn(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
