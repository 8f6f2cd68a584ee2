//! Perspective handlers: list, read-or-placeholder, upsert, update by number.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::model::{PerspectiveBody, PerspectiveContentBody, PerspectiveView, UpsertOutcome};
use crate::response::{ack, ack_created};
use crate::service::{PerspectiveService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list_perspectives(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = PerspectiveService::list(state.pool()).await?;
    Ok(Json(rows))
}

/// GET /api/perspectives/:number — placeholder with empty content when never written.
pub async fn get_perspective(
    State(state): State<AppState>,
    Path(number_str): Path<String>,
) -> Result<Json<PerspectiveView>, AppError> {
    let number = parse_id(&number_str)?;
    let view = match PerspectiveService::get(state.pool(), number).await? {
        Some(row) => PerspectiveView::Stored(row),
        None => PerspectiveView::placeholder(number),
    };
    Ok(Json(view))
}

/// POST /api/perspectives — 201 when the number is new, 200 when it was rewritten.
pub async fn upsert_perspective(
    State(state): State<AppState>,
    Payload(body): Payload<PerspectiveBody>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let (number, content) = RequestValidator::perspective(body)?;
    let outcome = PerspectiveService::upsert(state.pool(), number, &content).await?;
    Ok(match outcome {
        UpsertOutcome::Created => ack_created("Perspective created"),
        UpsertOutcome::Updated => ack("Perspective updated"),
    })
}

pub async fn update_perspective(
    State(state): State<AppState>,
    Path(number_str): Path<String>,
    Payload(body): Payload<PerspectiveContentBody>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let number = parse_id(&number_str)?;
    let content = RequestValidator::require_content(body.content)?;
    PerspectiveService::update_content(state.pool(), number, &content).await?;
    Ok(ack("Perspective updated"))
}
