use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::api::types::{IdeaDto, IdeaPatch};
use crate::config::SecurityConfig;
use crate::entities::{ideas, users};

pub mod migrator;
pub mod repositories;

pub use repositories::idea::IdeaRepository;
pub use repositories::user::UserRepository;

/// RFC 3339 UTC timestamp with fixed microsecond precision, so stored
/// values sort lexicographically in time order.
#[must_use]
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

fn is_in_memory(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

/// Pool settings. In-memory connections are never recycled: a fresh one
/// would open an empty, unmigrated database.
fn connect_options(db_url: &str, max_connections: u32, min_connections: u32) -> ConnectOptions {
    let mut opt = ConnectOptions::new(db_url.to_string());
    opt.max_connections(max_connections)
        .min_connections(min_connections)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    if !is_in_memory(db_url) {
        opt.idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600));
    }

    opt
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !is_in_memory(db_url) {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent()
                && !parent.as_os_str().is_empty()
            {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)
                    .with_context(|| format!("Failed to create database file {path_str}"))?;
            }
        }

        let opt = connect_options(db_url, max_connections, min_connections);
        let conn = Database::connect(opt)
            .await
            .with_context(|| format!("Failed to connect to {db_url}"))?;

        migrator::Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> UserRepository {
        UserRepository::new(self.conn.clone())
    }

    fn idea_repo(&self) -> IdeaRepository {
        IdeaRepository::new(self.conn.clone())
    }

    pub async fn list_users(&self) -> Result<Vec<users::Model>> {
        self.user_repo().list_all().await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<users::Model>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        config: &SecurityConfig,
    ) -> Result<Option<users::Model>> {
        self.user_repo().create(username, password, config).await
    }

    pub async fn list_ideas(&self) -> Result<Vec<ideas::Model>> {
        self.idea_repo().list_all().await
    }

    pub async fn get_idea(&self, id: &str) -> Result<Option<ideas::Model>> {
        self.idea_repo().get(id).await
    }

    pub async fn create_idea(&self, data: &IdeaDto) -> Result<ideas::Model> {
        self.idea_repo().create(data).await
    }

    pub async fn update_idea(&self, id: &str, patch: &IdeaPatch) -> Result<Option<ideas::Model>> {
        self.idea_repo().update(id, patch).await
    }

    pub async fn delete_idea(&self, id: &str) -> Result<bool> {
        self.idea_repo().delete(id).await
    }
}
