use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{FieldError, Validate, optional_non_blank, require_non_blank};

/// Credentials submitted to `/login` and `/register`.
#[derive(Clone, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for UserDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDto")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for UserDto {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_non_blank(&mut errors, "username", &self.username);
        require_non_blank(&mut errors, "password", &self.password);
        errors
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaDto {
    #[serde(default)]
    pub idea: String,
    #[serde(default)]
    pub description: String,
}

impl Validate for IdeaDto {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_non_blank(&mut errors, "idea", &self.idea);
        require_non_blank(&mut errors, "description", &self.description);
        errors
    }
}

/// Partial update for an idea; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdeaPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idea: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IdeaPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.idea.is_none() && self.description.is_none()
    }
}

impl Validate for IdeaPatch {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.is_empty() {
            errors.push(FieldError::new(
                "idea",
                "or description must be provided",
            ));
        }
        optional_non_blank(&mut errors, "idea", self.idea.as_deref());
        optional_non_blank(&mut errors, "description", self.description.as_deref());
        errors
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_dto_rules() {
        let dto = UserDto {
            username: "ada".to_string(),
            password: "secret".to_string(),
        };
        assert!(dto.validate().is_empty());

        let dto = UserDto {
            username: " ".to_string(),
            password: String::new(),
        };
        let fields: Vec<_> = dto.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["username", "password"]);
    }

    #[test]
    fn test_user_dto_debug_hides_password() {
        let dto = UserDto {
            username: "ada".to_string(),
            password: "hunter2".to_string(),
        };
        let printed = format!("{dto:?}");
        assert!(printed.contains("ada"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_idea_dto_rules() {
        let dto = IdeaDto {
            idea: "Rust".to_string(),
            description: "Rewrite it".to_string(),
        };
        assert!(dto.validate().is_empty());

        let dto = IdeaDto {
            idea: String::new(),
            description: "only a description".to_string(),
        };
        assert_eq!(dto.validate().len(), 1);
    }

    #[test]
    fn test_idea_patch_rules() {
        assert_eq!(IdeaPatch::default().validate().len(), 1);

        let patch = IdeaPatch {
            idea: None,
            description: Some("new".to_string()),
        };
        assert!(patch.validate().is_empty());

        let patch = IdeaPatch {
            idea: Some("  ".to_string()),
            description: None,
        };
        assert_eq!(
            patch.validate(),
            vec![FieldError::new("idea", "should not be empty")]
        );
    }
}
