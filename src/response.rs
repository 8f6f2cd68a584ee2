//! Acknowledgement bodies for write endpoints that do not echo a row.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: &'static str,
}

pub fn ack(message: &'static str) -> (StatusCode, Json<Ack>) {
    ack_with_status(StatusCode::OK, message)
}

pub fn ack_created(message: &'static str) -> (StatusCode, Json<Ack>) {
    ack_with_status(StatusCode::CREATED, message)
}

fn ack_with_status(status: StatusCode, message: &'static str) -> (StatusCode, Json<Ack>) {
    (
        status,
        Json(Ack {
            success: true,
            message,
        }),
    )
}
