//! Employee API Module
//!
//! Also hosts the nested per-employee resource listings
//! (documents, attendance, leaves, payroll, performance, activities).

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        // Nested resources, filtered by the owning employee
        .route("/{id}/documents", get(handler::list_documents))
        .route("/{id}/attendance", get(handler::list_attendance))
        .route("/{id}/leaves", get(handler::list_leaves))
        .route("/{id}/payroll", get(handler::list_payroll))
        .route("/{id}/performance", get(handler::list_performance))
        .route("/{id}/activities", get(handler::list_activities))
}
