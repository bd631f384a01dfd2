//! Attendance API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Attendance, AttendanceCreate, AttendanceUpdate};
use crate::db::repository::AttendanceRepository;
use crate::utils::{AppError, AppResult, ValidJson};

/// Get attendance record by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Attendance>> {
    let repo = AttendanceRepository::new(state.store.clone());
    let attendance = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("Attendance record not found"))?;
    Ok(Json(attendance))
}

/// Record a check-in event
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<AttendanceCreate>,
) -> (StatusCode, Json<Attendance>) {
    let repo = AttendanceRepository::new(state.store.clone());
    let attendance = repo.create(payload).await;
    (StatusCode::CREATED, Json(attendance))
}

/// Update an attendance record (e.g. add the check-out)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<AttendanceUpdate>,
) -> AppResult<Json<Attendance>> {
    let repo = AttendanceRepository::new(state.store.clone());
    let attendance = repo
        .update(id, payload)
        .await
        .ok_or_else(|| AppError::not_found("Attendance record not found"))?;
    Ok(Json(attendance))
}
