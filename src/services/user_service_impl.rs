//! `SeaORM` implementation of the `UserService` trait.

use anyhow::Context;
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tokio::task;
use tracing::{debug, info};

use crate::api::types::UserDto;
use crate::config::SecurityConfig;
use crate::db::Store;
use crate::db::repositories::user as user_repo;
use crate::entities::users;
use crate::models::user::UserResponse;
use crate::services::user_service::{UserError, UserService};

pub struct SeaOrmUserService {
    store: Store,
    security: SecurityConfig,
    /// Built on the first unknown-user login, then reused.
    dummy_hash: OnceCell<String>,
}

impl SeaOrmUserService {
    #[must_use]
    pub fn new(store: Store, security: SecurityConfig) -> Self {
        Self {
            store,
            security,
            dummy_hash: OnceCell::new(),
        }
    }

    async fn unknown_user_hash(&self) -> Result<&str, UserError> {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| async {
                let security = self.security.clone();
                task::spawn_blocking(move || user_repo::dummy_hash(&security))
                    .await
                    .context("Dummy hash task panicked")
                    .and_then(|hash| hash)
            })
            .await?;
        Ok(hash.as_str())
    }

    /// Runs a full Argon2 verification whether or not the user exists.
    async fn check_credentials(
        &self,
        user: Option<users::Model>,
        password: &str,
    ) -> Result<Option<users::Model>, UserError> {
        let password = password.to_string();

        let Some(user) = user else {
            let hash = self.unknown_user_hash().await?.to_string();
            task::spawn_blocking(move || users::verify_hash(&hash, &password))
                .await
                .context("Password verification task panicked")?;
            debug!("Login rejected: unknown user");
            return Ok(None);
        };

        let (user, is_valid) = task::spawn_blocking(move || {
            let is_valid = user.verify_password(&password);
            (user, is_valid)
        })
        .await
        .context("Password verification task panicked")?;

        if !is_valid {
            debug!("Login rejected: password mismatch");
            return Ok(None);
        }

        Ok(Some(user))
    }
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn list_users(&self) -> Result<Vec<UserResponse>, UserError> {
        let users = self.store.list_users().await?;
        Ok(users.iter().map(|u| u.to_response(false)).collect())
    }

    async fn login(&self, data: &UserDto) -> Result<UserResponse, UserError> {
        let user = self.store.get_user_by_username(&data.username).await?;

        let user = self
            .check_credentials(user, &data.password)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        info!("User {} logged in", user.username);
        Ok(user.to_response(true))
    }

    async fn register(&self, data: &UserDto) -> Result<UserResponse, UserError> {
        if self
            .store
            .get_user_by_username(&data.username)
            .await?
            .is_some()
        {
            return Err(UserError::AlreadyExists);
        }

        // A concurrent registration can still win the race; the unique
        // index turns that into `None` here.
        let user = self
            .store
            .create_user(&data.username, &data.password, &self.security)
            .await?
            .ok_or(UserError::AlreadyExists)?;

        Ok(user.to_response(true))
    }
}
