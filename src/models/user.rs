use serde::Serialize;

/// Sanitized user as returned to clients. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
