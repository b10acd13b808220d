//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool passed explicitly - no global handle
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Transactions for multi-step operations (cascade delete, update + link)

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;

/// In-memory pool with the schema applied, for unit tests
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = create_pool("sqlite::memory:")
        .await
        .expect("in-memory pool");
    migrations::run(&pool).await.expect("migrations");
    pool
}
