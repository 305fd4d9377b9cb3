//! Canned upstream API response bodies.

use serde_json::{json, Value};

/// JSON body returned by the upstream `GET /users/session/user` endpoint.
///
/// Matches the upstream wire shape: snake_case field names, RFC 3339 timestamp.
pub fn session_user_body(id: &str) -> Value {
    json!({
        "id": id,
        "first_name": "Ansel",
        "last_name": "Adams",
        "email": "ansel@example.com",
        "avatar_url": null,
        "created_at": "2024-01-15T10:30:00Z",
    })
}

/// JSON body carrying an upstream `message` field, used by error responses and
/// by successful update responses alike.
pub fn message_body(message: &str) -> Value {
    json!({ "message": message })
}
