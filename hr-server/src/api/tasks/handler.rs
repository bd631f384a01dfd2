//! Task API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Task, TaskCreate, TaskUpdate};
use crate::db::repository::TaskRepository;
use crate::utils::{AppError, AppResult, ValidJson};

/// Get task by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Task>> {
    let repo = TaskRepository::new(state.store.clone());
    let task = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("Task not found"))?;
    Ok(Json(task))
}

/// Create a new task
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<TaskCreate>,
) -> (StatusCode, Json<Task>) {
    let repo = TaskRepository::new(state.store.clone());
    let task = repo.create(payload).await;
    (StatusCode::CREATED, Json(task))
}

/// Update a task (partial merge)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<TaskUpdate>,
) -> AppResult<Json<Task>> {
    let repo = TaskRepository::new(state.store.clone());
    let task = repo
        .update(id, payload)
        .await
        .ok_or_else(|| AppError::not_found("Task not found"))?;
    Ok(Json(task))
}

/// Flip a task's completion flag (no body)
pub async fn toggle(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Task>> {
    let repo = TaskRepository::new(state.store.clone());
    let task = repo
        .toggle_completion(id)
        .await
        .ok_or_else(|| AppError::not_found("Task not found"))?;
    Ok(Json(task))
}
