//! User endpoints: listing, login and registration.
//!
//! Handlers only map HTTP to [`UserService`](crate::services::UserService)
//! calls; responses are always the sanitized [`UserResponse`].

use axum::{Json, extract::State};
use std::sync::Arc;

use super::types::UserDto;
use super::{ApiError, AppState, ValidatedJson};
use crate::models::user::UserResponse;

/// `GET /api/users`
pub async fn show_all_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service().list_users().await?;
    Ok(Json(users))
}

/// `POST /login`
///
/// Unknown usernames and wrong passwords both produce the same
/// `400 Invalid username/password`.
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service().login(&payload).await?;
    Ok(Json(user))
}

/// `POST /register`
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service().register(&payload).await?;
    Ok(Json(user))
}
