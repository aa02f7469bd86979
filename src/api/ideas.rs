use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::info;

use super::types::{IdeaDto, IdeaPatch};
use super::{ApiError, AppState, ValidId, ValidatedJson};
use crate::models::idea::{DeleteResponse, IdeaResponse};

pub async fn show_all_ideas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<IdeaResponse>>, ApiError> {
    let ideas = state.idea_service().show_all().await?;
    Ok(Json(ideas))
}

pub async fn create_idea(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<IdeaDto>,
) -> Result<Json<IdeaResponse>, ApiError> {
    info!(payload = ?payload, "Creating idea");
    let idea = state.idea_service().create(&payload).await?;
    Ok(Json(idea))
}

pub async fn read_idea(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<IdeaResponse>, ApiError> {
    let idea = state.idea_service().read(&id).await?;
    Ok(Json(idea))
}

pub async fn update_idea(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ValidatedJson(payload): ValidatedJson<IdeaPatch>,
) -> Result<Json<IdeaResponse>, ApiError> {
    info!(id = %id, payload = ?payload, "Updating idea");
    let idea = state.idea_service().update(&id, &payload).await?;
    Ok(Json(idea))
}

pub async fn destroy_idea(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let result = state.idea_service().destroy(&id).await?;
    Ok(Json(result))
}
