//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Task, User, UserCreate, UserUpdate};
use crate::db::repository::{TaskRepository, UserRepository};
use crate::utils::{AppError, AppResult, ValidJson};

/// List all users
pub async fn list(State(state): State<ServerState>) -> Json<Vec<User>> {
    let repo = UserRepository::new(state.store.clone());
    Json(repo.find_all().await)
}

/// Get user by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let repo = UserRepository::new(state.store.clone());
    let user = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(user))
}

/// Create a new user
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<UserCreate>,
) -> (StatusCode, Json<User>) {
    let repo = UserRepository::new(state.store.clone());
    let user = repo.create(payload).await;
    (StatusCode::CREATED, Json(user))
}

/// Update a user (partial merge)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<UserUpdate>,
) -> AppResult<Json<User>> {
    let repo = UserRepository::new(state.store.clone());
    let user = repo
        .update(id, payload)
        .await
        .ok_or_else(|| AppError::not_found("User not found"))?;
    Ok(Json(user))
}

/// List the tasks owned by a user
pub async fn list_tasks(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Json<Vec<Task>> {
    let repo = TaskRepository::new(state.store.clone());
    Json(repo.find_by_user_id(id).await)
}
