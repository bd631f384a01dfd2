//! Performance API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Performance, PerformanceCreate, PerformanceUpdate};
use crate::db::repository::PerformanceRepository;
use crate::utils::{AppError, AppResult, ValidJson};

/// Get performance review by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Performance>> {
    let repo = PerformanceRepository::new(state.store.clone());
    let review = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("Performance record not found"))?;
    Ok(Json(review))
}

/// Create a performance review
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<PerformanceCreate>,
) -> (StatusCode, Json<Performance>) {
    let repo = PerformanceRepository::new(state.store.clone());
    let review = repo.create(payload).await;
    (StatusCode::CREATED, Json(review))
}

/// Update a performance review (partial merge)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<PerformanceUpdate>,
) -> AppResult<Json<Performance>> {
    let repo = PerformanceRepository::new(state.store.clone());
    let review = repo
        .update(id, payload)
        .await
        .ok_or_else(|| AppError::not_found("Performance record not found"))?;
    Ok(Json(review))
}
