//! HTTP server layer
//!
//! Axum server with:
//! - HTML pages rendered from embedded templates
//! - Request tracing
//! - Graceful shutdown
//! - HTML error pages with status codes

pub mod error;
pub mod routes;
pub mod server;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
