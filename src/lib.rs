//! Couple journal: REST backend for a couple's shared data, memories, and perspectives on SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{CoupleData, Memory, Perspective, PerspectiveView};
pub use response::{ack, ack_created};
pub use routes::{app, common_routes, couple_routes, memory_routes, perspective_routes};
pub use service::{CoupleService, MemoryService, PerspectiveService};
pub use state::AppState;
pub use store::Store;
