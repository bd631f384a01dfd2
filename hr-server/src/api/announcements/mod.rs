//! Announcement API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Announcement router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/announcements", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/recent", get(handler::recent))
        .route("/{id}", get(handler::get_by_id))
}
