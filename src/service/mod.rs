//! Single-statement data access per entity, plus request validation.

mod couple;
mod memory;
mod perspective;
mod validation;
pub use couple::CoupleService;
pub use memory::MemoryService;
pub use perspective::PerspectiveService;
pub use validation::RequestValidator;
