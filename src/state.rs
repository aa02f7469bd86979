use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{IdeaService, SeaOrmIdeaService, SeaOrmUserService, UserService};

/// Long-lived handles shared by every request.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub user_service: Arc<dyn UserService>,

    pub idea_service: Arc<dyn IdeaService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let user_service: Arc<dyn UserService> = Arc::new(SeaOrmUserService::new(
            store.clone(),
            config.security.clone(),
        ));
        let idea_service: Arc<dyn IdeaService> = Arc::new(SeaOrmIdeaService::new(store.clone()));

        Self {
            config: Arc::new(config),
            store,
            user_service,
            idea_service,
        }
    }
}
