use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

use crate::api::types::{IdeaDto, IdeaPatch};
use crate::entities::{ideas, prelude::*};

pub struct IdeaRepository {
    conn: DatabaseConnection,
}

impl IdeaRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<ideas::Model>> {
        Ideas::find()
            .order_by_asc(ideas::Column::CreatedAt)
            .all(&self.conn)
            .await
            .context("Failed to list ideas")
    }

    pub async fn get(&self, id: &str) -> Result<Option<ideas::Model>> {
        Ideas::find_by_id(id.to_string())
            .one(&self.conn)
            .await
            .context("Failed to query idea")
    }

    pub async fn create(&self, data: &IdeaDto) -> Result<ideas::Model> {
        let now = crate::db::timestamp_now();

        let active = ideas::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            idea: Set(data.idea.clone()),
            description: Set(data.description.clone()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert idea")?;

        info!("Created idea {}", model.id);
        Ok(model)
    }

    /// Applies the fields present in `patch`. Returns `None` if no idea has `id`.
    pub async fn update(&self, id: &str, patch: &IdeaPatch) -> Result<Option<ideas::Model>> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active: ideas::ActiveModel = existing.into();
        if let Some(idea) = &patch.idea {
            active.idea = Set(idea.clone());
        }
        if let Some(description) = &patch.description {
            active.description = Set(description.clone());
        }
        active.updated_at = Set(crate::db::timestamp_now());

        let model = active
            .update(&self.conn)
            .await
            .context("Failed to update idea")?;

        Ok(Some(model))
    }

    /// Returns `false` if no idea has `id`.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = Ideas::delete_by_id(id.to_string())
            .exec(&self.conn)
            .await
            .context("Failed to delete idea")?;

        if result.rows_affected > 0 {
            info!("Deleted idea {}", id);
        }
        Ok(result.rows_affected > 0)
    }
}
