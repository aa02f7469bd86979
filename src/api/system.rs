use axum::{Json, extract::State};
use std::sync::Arc;

use super::types::HealthResponse;
use super::{ApiError, AppState};

/// `GET /health`: succeeds only if the database answers.
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    state
        .store()
        .ping()
        .await
        .map_err(|e| ApiError::DatabaseError(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "ok",
        uptime_seconds: state.start_time.elapsed().as_secs(),
    }))
}
