//! Memory CRUD routes.

use crate::handlers::memory::{create_memory, delete_memory, get_memory, list_memories, update_memory};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn memory_routes(state: AppState) -> Router {
    Router::new()
        .route("/memories", get(list_memories).post(create_memory))
        .route(
            "/memories/:id",
            get(get_memory).put(update_memory).delete(delete_memory),
        )
        .with_state(state)
}
