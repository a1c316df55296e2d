//! HTTP driver surface
//!
//! - `handlers` - request handlers and the engine error -> status mapping
//! - `responses` - response DTOs
//! - `routes` - router assembly
//! - `openapi` - OpenAPI document

pub mod handlers;
pub mod openapi;
pub mod responses;
pub mod routes;

pub use routes::create_router;
