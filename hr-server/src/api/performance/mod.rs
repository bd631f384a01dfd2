//! Performance API Module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Performance router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/performance", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
}
