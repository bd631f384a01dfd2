//! Announcement API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::LimitQuery;
use crate::core::ServerState;
use crate::db::models::{Announcement, AnnouncementCreate};
use crate::db::repository::AnnouncementRepository;
use crate::utils::{AppError, AppResult, ValidJson};

const DEFAULT_RECENT_LIMIT: usize = 5;

/// List all announcements
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Announcement>> {
    let repo = AnnouncementRepository::new(state.store.clone());
    Json(repo.find_all().await)
}

/// Most recently posted announcements, newest first
pub async fn recent(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<Announcement>> {
    let repo = AnnouncementRepository::new(state.store.clone());
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    Json(repo.find_recent(limit).await)
}

/// Get announcement by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Announcement>> {
    let repo = AnnouncementRepository::new(state.store.clone());
    let announcement = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("Announcement not found"))?;
    Ok(Json(announcement))
}

/// Post a new announcement
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<AnnouncementCreate>,
) -> (StatusCode, Json<Announcement>) {
    let repo = AnnouncementRepository::new(state.store.clone());
    let announcement = repo.create(payload).await;
    (StatusCode::CREATED, Json(announcement))
}
