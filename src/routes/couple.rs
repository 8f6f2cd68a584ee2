use crate::handlers::couple::{get_couple_data, update_home_message, update_intro_text, update_start_date};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn couple_routes(state: AppState) -> Router {
    Router::new()
        .route("/couple-data", get(get_couple_data))
        .route("/couple-data/start-date", put(update_start_date))
        .route("/couple-data/home-message", put(update_home_message))
        .route("/couple-data/intro", put(update_intro_text))
        .with_state(state)
}
