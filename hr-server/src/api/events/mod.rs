//! Event API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Event router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/events", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/upcoming", get(handler::upcoming))
        .route("/{id}", get(handler::get_by_id))
}
