//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{
    Activity, Attendance, Document, Employee, EmployeeCreate, EmployeeUpdate, Leave, Payroll,
    Performance,
};
use crate::db::repository::{
    ActivityRepository, AttendanceRepository, DocumentRepository, EmployeeRepository,
    LeaveRepository, PayrollRepository, PerformanceRepository,
};
use crate::utils::{AppError, AppResult, ValidJson};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Employee>> {
    let repo = EmployeeRepository::new(state.store.clone());
    Json(repo.find_all().await)
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.store.clone());
    let employee = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("Employee not found"))?;
    Ok(Json(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<EmployeeCreate>,
) -> (StatusCode, Json<Employee>) {
    let repo = EmployeeRepository::new(state.store.clone());
    let employee = repo.create(payload).await;
    (StatusCode::CREATED, Json(employee))
}

/// Update an employee (partial merge)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ValidJson(payload): ValidJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.store.clone());
    let employee = repo
        .update(id, payload)
        .await
        .ok_or_else(|| AppError::not_found("Employee not found"))?;
    Ok(Json(employee))
}

// ── Nested resources ────────────────────────────────────────────────

/// List an employee's documents
pub async fn list_documents(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Json<Vec<Document>> {
    let repo = DocumentRepository::new(state.store.clone());
    Json(repo.find_by_employee_id(id).await)
}

/// List an employee's attendance records
pub async fn list_attendance(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Json<Vec<Attendance>> {
    let repo = AttendanceRepository::new(state.store.clone());
    Json(repo.find_by_employee_id(id).await)
}

/// List an employee's leave requests
pub async fn list_leaves(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Json<Vec<Leave>> {
    let repo = LeaveRepository::new(state.store.clone());
    Json(repo.find_by_employee_id(id).await)
}

/// List an employee's payroll records
pub async fn list_payroll(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Json<Vec<Payroll>> {
    let repo = PayrollRepository::new(state.store.clone());
    Json(repo.find_by_employee_id(id).await)
}

/// List an employee's performance reviews
pub async fn list_performance(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Json<Vec<Performance>> {
    let repo = PerformanceRepository::new(state.store.clone());
    Json(repo.find_by_employee_id(id).await)
}

/// List an employee's activities
pub async fn list_activities(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Json<Vec<Activity>> {
    let repo = ActivityRepository::new(state.store.clone());
    Json(repo.find_by_employee_id(id).await)
}
