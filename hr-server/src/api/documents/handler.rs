//! Document API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Document, DocumentCreate};
use crate::db::repository::DocumentRepository;
use crate::utils::{AppError, AppResult, ValidJson};

/// Get document by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Document>> {
    let repo = DocumentRepository::new(state.store.clone());
    let document = repo
        .find_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found("Document not found"))?;
    Ok(Json(document))
}

/// Upload a new document record
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<DocumentCreate>,
) -> (StatusCode, Json<Document>) {
    let repo = DocumentRepository::new(state.store.clone());
    let document = repo.create(payload).await;
    (StatusCode::CREATED, Json(document))
}

/// Delete a document — 204 on success, 404 if absent
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let repo = DocumentRepository::new(state.store.clone());
    if !repo.delete(id).await {
        return Err(AppError::not_found("Document not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
