//! Leave API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Leave, LeaveCreate, LeaveStatusUpdate};
use crate::db::repository::LeaveRepository;
use crate::utils::{AppError, AppResult, ValidJson};

/// Get leave request by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Leave>> {
    let repo = LeaveRepository::new(state.store.clone());
    let leave = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("Leave request not found"))?;
    Ok(Json(leave))
}

/// File a new leave request
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<LeaveCreate>,
) -> (StatusCode, Json<Leave>) {
    let repo = LeaveRepository::new(state.store.clone());
    let leave = repo.create(payload).await;
    (StatusCode::CREATED, Json(leave))
}

/// Approve or reject a leave request.
///
/// The status value is validated against the enum; `approvedBy` is
/// optional and overwrites the stored approver.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<LeaveStatusUpdate>,
) -> AppResult<Json<Leave>> {
    let repo = LeaveRepository::new(state.store.clone());
    let leave = repo
        .update_status(id, payload.status, payload.approved_by)
        .await
        .ok_or_else(|| AppError::not_found("Leave request not found"))?;
    Ok(Json(leave))
}
