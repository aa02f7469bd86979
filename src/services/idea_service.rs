//! Domain service for ideas: plain create/read/update/delete.

use thiserror::Error;

use crate::api::types::{IdeaDto, IdeaPatch};
use crate::models::idea::{DeleteResponse, IdeaResponse};

#[derive(Debug, Error)]
pub enum IdeaError {
    #[error("Idea not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for IdeaError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for IdeaError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait IdeaService: Send + Sync {
    async fn show_all(&self) -> Result<Vec<IdeaResponse>, IdeaError>;

    async fn create(&self, data: &IdeaDto) -> Result<IdeaResponse, IdeaError>;

    /// # Errors
    ///
    /// Returns [`IdeaError::NotFound`] if no idea has `id`.
    async fn read(&self, id: &str) -> Result<IdeaResponse, IdeaError>;

    /// Overwrites only the fields present in `data`.
    ///
    /// # Errors
    ///
    /// Returns [`IdeaError::NotFound`] if no idea has `id`.
    async fn update(&self, id: &str, data: &IdeaPatch) -> Result<IdeaResponse, IdeaError>;

    /// # Errors
    ///
    /// Returns [`IdeaError::NotFound`] if no idea has `id`.
    async fn destroy(&self, id: &str) -> Result<DeleteResponse, IdeaError>;
}
