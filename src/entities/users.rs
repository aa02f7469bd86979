use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use sea_orm::entity::prelude::*;

use crate::models::user::UserResponse;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// UUID v4, stored as text
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub username: String,

    /// Argon2id password hash
    pub password_hash: String,

    /// Opaque 64-char hex token handed out on login and registration
    #[sea_orm(unique)]
    pub token: String,

    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Checks `password` against the stored hash.
    ///
    /// The hash parameters are read from the PHC string, so records hashed
    /// under older Argon2 settings still verify. A malformed hash never
    /// matches.
    ///
    /// This is CPU-bound; async callers should run it on a blocking thread.
    #[must_use]
    pub fn verify_password(&self, password: &str) -> bool {
        verify_hash(&self.password_hash, password)
    }

    /// Client-facing view of the user, without the credential hash.
    ///
    /// The token is only included for the user who just authenticated;
    /// listings pass `false`.
    #[must_use]
    pub fn to_response(&self, show_token: bool) -> UserResponse {
        UserResponse {
            id: self.id.clone(),
            username: self.username.clone(),
            created: self.created_at.clone(),
            token: show_token.then(|| self.token.clone()),
        }
    }
}

/// Verifies `password` against a PHC string, using the cost parameters
/// encoded in the hash.
#[must_use]
pub fn verify_hash(password_hash: &str, password: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
