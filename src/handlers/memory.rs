//! Memory handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::model::MemoryBody;
use crate::response::ack;
use crate::service::{MemoryService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list_memories(State(state): State<AppState>) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = MemoryService::list(state.pool()).await?;
    Ok(Json(rows))
}

pub async fn get_memory(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = MemoryService::get(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound("Memory not found".into()))?;
    Ok(Json(row))
}

/// POST /api/memories — 201 with the stored row.
pub async fn create_memory(
    State(state): State<AppState>,
    Payload(body): Payload<MemoryBody>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let input = RequestValidator::memory(body)?;
    let row = MemoryService::create(state.pool(), &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/memories/:id — reports success even when the id does not exist.
pub async fn update_memory(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(body): Payload<MemoryBody>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let input = RequestValidator::memory(body)?;
    MemoryService::update(state.pool(), id, &input).await?;
    Ok(ack("Memory updated"))
}

pub async fn delete_memory(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    MemoryService::delete(state.pool(), id).await?;
    Ok(ack("Memory deleted"))
}
