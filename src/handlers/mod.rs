//! HTTP handlers for couple data, memories, and perspectives.

pub mod couple;
pub mod memory;
pub mod perspective;
pub use couple::*;
pub use memory::*;
pub use perspective::*;

use crate::error::AppError;

/// Integer path segment (memory id or perspective number).
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}
