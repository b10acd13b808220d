//! rollcall-core: configuration and error types shared by the rollcall
//! server and CLI.

pub mod config;
pub mod error;

pub use config::RollcallConfig;
pub use error::{Result, RollcallError};
