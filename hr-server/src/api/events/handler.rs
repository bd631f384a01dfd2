//! Event API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::LimitQuery;
use crate::core::ServerState;
use crate::db::models::{Event, EventCreate};
use crate::db::repository::EventRepository;
use crate::utils::{AppError, AppResult, ValidJson};

const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// List all events
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Event>> {
    let repo = EventRepository::new(state.store.clone());
    Json(repo.find_all().await)
}

/// Events starting after now, soonest first
pub async fn upcoming(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<Event>> {
    let repo = EventRepository::new(state.store.clone());
    let limit = query.limit.unwrap_or(DEFAULT_UPCOMING_LIMIT);
    Json(repo.find_upcoming(limit).await)
}

/// Get event by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Event>> {
    let repo = EventRepository::new(state.store.clone());
    let event = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("Event not found"))?;
    Ok(Json(event))
}

/// Create a new event
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<EventCreate>,
) -> (StatusCode, Json<Event>) {
    let repo = EventRepository::new(state.store.clone());
    let event = repo.create(payload).await;
    (StatusCode::CREATED, Json(event))
}
