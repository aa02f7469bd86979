//! Domain service for user accounts.
//!
//! Handles listing, login and registration. Login never reveals whether the
//! username or the password was wrong.

use thiserror::Error;

use crate::api::types::UserDto;
use crate::models::user::UserResponse;

/// Errors specific to user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid username/password")]
    InvalidCredentials,

    #[error("User already exists")]
    AlreadyExists,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Domain service trait for users.
#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Lists every registered user, sanitized.
    async fn list_users(&self) -> Result<Vec<UserResponse>, UserError>;

    /// Verifies credentials and returns the sanitized user.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::InvalidCredentials`] for an unknown username and
    /// for a wrong password alike.
    async fn login(&self, data: &UserDto) -> Result<UserResponse, UserError>;

    /// Creates a new user with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::AlreadyExists`] if the username is taken.
    async fn register(&self, data: &UserDto) -> Result<UserResponse, UserError>;
}
