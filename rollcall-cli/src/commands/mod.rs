//! Command implementations for the rollcall CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use rollcall_core::RollcallConfig;

/// Effective config with an optional `--database-url` override applied
pub(crate) fn resolve_config(database_url: Option<String>) -> Result<RollcallConfig> {
    let mut config = RollcallConfig::load().context("Failed to load rollcall config")?;
    if let Some(url) = database_url {
        config.database.url = url;
    }
    Ok(config)
}
