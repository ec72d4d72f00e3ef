//! # Estate API
//!
//! Thin axum adapters over the `estate-core` services: generic CRUD routes
//! for every entity, the domain routes, and the envelope-to-status mapping.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use response::ApiResponse;
pub use routes::build_router;
pub use state::AppState;
