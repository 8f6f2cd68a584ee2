use crate::handlers::perspective::{get_perspective, list_perspectives, update_perspective, upsert_perspective};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn perspective_routes(state: AppState) -> Router {
    Router::new()
        .route("/perspectives", get(list_perspectives).post(upsert_perspective))
        .route("/perspectives/:number", get(get_perspective).put(update_perspective))
        .with_state(state)
}
