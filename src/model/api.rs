use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response carrying an upstream status message after a successful update
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// Human-readable message passed through from the upstream API
    pub message: String,
}

/// The response when a form submission fails field-level validation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct FormErrorsDto {
    /// Mapping from form field name to a human-readable error message
    pub errors: BTreeMap<String, String>,
}
