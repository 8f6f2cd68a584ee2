//! Route assembly. Everything is served under `/api`.

mod common;
mod couple;
mod memory;
mod perspective;

pub use common::common_routes;
pub use couple::couple_routes;
pub use memory::memory_routes;
pub use perspective::perspective_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Full application: `/api` routes with request tracing, permissive CORS,
/// and a body cap of `body_limit_bytes` enforced by the body extractors so
/// oversize requests get the JSON error shape.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    let api = Router::new()
        .merge(common_routes(state.clone()))
        .merge(couple_routes(state.clone()))
        .merge(memory_routes(state.clone()))
        .merge(perspective_routes(state));

    Router::new().nest("/api", api).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(DefaultBodyLimit::max(body_limit_bytes)),
    )
}
