//! rollcall-server: student/course enrollment web application
//!
//! - `db`: SQLite pool, schema creation, repositories
//! - `models`: records and form payloads
//! - `http`: axum router, handlers, HTML views

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
