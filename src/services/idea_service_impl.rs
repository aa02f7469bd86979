//! `SeaORM` implementation of the `IdeaService` trait.

use async_trait::async_trait;

use crate::api::types::{IdeaDto, IdeaPatch};
use crate::db::Store;
use crate::models::idea::{DeleteResponse, IdeaResponse};
use crate::services::idea_service::{IdeaError, IdeaService};

pub struct SeaOrmIdeaService {
    store: Store,
}

impl SeaOrmIdeaService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl IdeaService for SeaOrmIdeaService {
    async fn show_all(&self) -> Result<Vec<IdeaResponse>, IdeaError> {
        let ideas = self.store.list_ideas().await?;
        Ok(ideas.into_iter().map(IdeaResponse::from).collect())
    }

    async fn create(&self, data: &IdeaDto) -> Result<IdeaResponse, IdeaError> {
        let idea = self.store.create_idea(data).await?;
        Ok(idea.into())
    }

    async fn read(&self, id: &str) -> Result<IdeaResponse, IdeaError> {
        self.store
            .get_idea(id)
            .await?
            .map(IdeaResponse::from)
            .ok_or_else(|| IdeaError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &str, data: &IdeaPatch) -> Result<IdeaResponse, IdeaError> {
        self.store
            .update_idea(id, data)
            .await?
            .map(IdeaResponse::from)
            .ok_or_else(|| IdeaError::NotFound(id.to_string()))
    }

    async fn destroy(&self, id: &str) -> Result<DeleteResponse, IdeaError> {
        if self.store.delete_idea(id).await? {
            Ok(DeleteResponse { deleted: true })
        } else {
            Err(IdeaError::NotFound(id.to_string()))
        }
    }
}
