//! Payroll API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Payroll, PayrollCreate, PayrollUpdate};
use crate::db::repository::PayrollRepository;
use crate::utils::{AppError, AppResult, ValidJson};

/// Get payroll record by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Payroll>> {
    let repo = PayrollRepository::new(state.store.clone());
    let payroll = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("Payroll record not found"))?;
    Ok(Json(payroll))
}

/// Create a payroll record for a pay cycle
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<PayrollCreate>,
) -> (StatusCode, Json<Payroll>) {
    let repo = PayrollRepository::new(state.store.clone());
    let payroll = repo.create(payload).await;
    (StatusCode::CREATED, Json(payroll))
}

/// Update a payroll record (partial merge)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<PayrollUpdate>,
) -> AppResult<Json<Payroll>> {
    let repo = PayrollRepository::new(state.store.clone());
    let payroll = repo
        .update(id, payload)
        .await
        .ok_or_else(|| AppError::not_found("Payroll record not found"))?;
    Ok(Json(payroll))
}
