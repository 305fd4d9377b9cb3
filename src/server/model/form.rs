//! Form payloads and field-level validation.
//!
//! Field names are part of the user-facing contract of the site's forms and
//! are preserved exactly (`firstName`, `currentPassword`, ...). Validation is
//! local and blocks the upstream call entirely when it fails.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Mapping from form field name to a human-readable error message.
///
/// Constructed per submission; an empty map means the form is valid.
pub type FieldErrors = BTreeMap<String, String>;

/// Message for an email field without an `@`.
pub const INVALID_EMAIL: &str = "Invalid email address";

/// Message for a login password below the minimum length.
pub const PASSWORD_TOO_SHORT: &str = "Password should be at least 12 characters";

/// Message for a password change whose confirmation does not match.
pub const PASSWORD_MISMATCH: &str = "New password and new password confirmation do not match";

/// Minimum accepted password length at login.
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Login form submission.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginForm {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl LoginForm {
    /// Validate email shape and password length.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if !self.email.contains('@') {
            errors.insert("email".to_string(), INVALID_EMAIL.to_string());
        }

        // Count characters, not bytes, so multibyte passwords are measured
        // the way the user typed them.
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.insert("password".to_string(), PASSWORD_TOO_SHORT.to_string());
        }

        errors
    }
}

/// Profile information update submission.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInformationForm {
    /// Upstream id of the user being updated.
    pub uuid: String,
    /// New first name.
    pub first_name: String,
    /// New last name.
    pub last_name: String,
    /// New email address.
    pub email: String,
}

impl UpdateInformationForm {
    /// Validate email shape.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if !self.email.contains('@') {
            errors.insert("email".to_string(), INVALID_EMAIL.to_string());
        }

        errors
    }
}

/// Password change submission.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordForm {
    /// Upstream id of the user being updated.
    pub uuid: String,
    /// Current password, verified upstream.
    pub current_password: String,
    /// Desired new password.
    pub new_password: String,
    /// Confirmation of the new password.
    pub confirm_new_password: String,
}

impl UpdatePasswordForm {
    /// Validate that the new password and its confirmation match.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.new_password != self.confirm_new_password {
            errors.insert("password".to_string(), PASSWORD_MISMATCH.to_string());
        }

        errors
    }
}
