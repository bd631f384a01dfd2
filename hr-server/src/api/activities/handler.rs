//! Activity API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::LimitQuery;
use crate::core::ServerState;
use crate::db::models::{Activity, ActivityCreate, ActivityStatusUpdate};
use crate::db::repository::ActivityRepository;
use crate::utils::{AppError, AppResult, ValidJson};

const DEFAULT_RECENT_LIMIT: usize = 10;

/// Most recent activities, newest first
pub async fn recent(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<Activity>> {
    let repo = ActivityRepository::new(state.store.clone());
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    Json(repo.find_recent(limit).await)
}

/// Get activity by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Activity>> {
    let repo = ActivityRepository::new(state.store.clone());
    let activity = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("Activity not found"))?;
    Ok(Json(activity))
}

/// Record a new activity
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<ActivityCreate>,
) -> (StatusCode, Json<Activity>) {
    let repo = ActivityRepository::new(state.store.clone());
    let activity = repo.create(payload).await;
    (StatusCode::CREATED, Json(activity))
}

/// Update the status of an activity
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<ActivityStatusUpdate>,
) -> AppResult<Json<Activity>> {
    let repo = ActivityRepository::new(state.store.clone());
    let activity = repo
        .update_status(id, payload.status)
        .await
        .ok_or_else(|| AppError::not_found("Activity not found"))?;
    Ok(Json(activity))
}
