//! Couple data handlers: read the singleton and update its three fields.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::model::{HomeMessageBody, IntroTextBody, StartDateBody};
use crate::response::ack;
use crate::service::{CoupleService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// GET /api/couple-data — the singleton row, or `{}` when not seeded.
pub async fn get_couple_data(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(match CoupleService::get(state.pool()).await? {
        Some(row) => Json(row).into_response(),
        None => Json(json!({})).into_response(),
    })
}

pub async fn update_start_date(
    State(state): State<AppState>,
    Payload(body): Payload<StartDateBody>,
) -> Result<impl IntoResponse, AppError> {
    let start_date = RequestValidator::require_text("start_date", body.start_date)?;
    CoupleService::update_start_date(state.pool(), &start_date).await?;
    Ok(ack("Start date updated"))
}

/// Absent or null values clear the message.
pub async fn update_home_message(
    State(state): State<AppState>,
    Payload(body): Payload<HomeMessageBody>,
) -> Result<impl IntoResponse, AppError> {
    CoupleService::update_home_message(state.pool(), body.home_message.as_deref()).await?;
    Ok(ack("Home message updated"))
}

pub async fn update_intro_text(
    State(state): State<AppState>,
    Payload(body): Payload<IntroTextBody>,
) -> Result<impl IntoResponse, AppError> {
    CoupleService::update_intro_text(state.pool(), body.intro_text.as_deref()).await?;
    Ok(ack("Intro text updated"))
}
