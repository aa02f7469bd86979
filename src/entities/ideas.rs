use sea_orm::entity::prelude::*;

use crate::models::idea::IdeaResponse;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ideas")]
pub struct Model {
    /// UUID v4, stored as text
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(column_type = "Text")]
    pub idea: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for IdeaResponse {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            idea: model.idea,
            description: model.description,
            created: model.created_at,
            updated: model.updated_at,
        }
    }
}
