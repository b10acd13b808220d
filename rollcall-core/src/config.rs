use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{Result, RollcallError};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Default database location, created next to the working directory if absent
pub const DEFAULT_DATABASE_URL: &str = "sqlite://rollcall.sqlite3";

/// Default maximum pooled connections. Kept low for single-user tooling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Centralized configuration for rollcall
///
/// Every section and key is optional in the TOML file; absent keys fall back
/// to the defaults above.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollcallConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl RollcallConfig {
    /// Load config from `config_path()`, then apply environment overrides.
    ///
    /// A missing file is not an error: rollcall runs on defaults.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path())?;
        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Load config from an explicit path without environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| RollcallError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| RollcallError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config file path: `$ROLLCALL_CONFIG` or `~/.rollcall/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("ROLLCALL_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rollcall/config.toml")
    }

    /// Apply `DATABASE_URL` and `ROLLCALL_BIND` overrides.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            self.database.url = url;
        }

        if let Some(bind) = lookup("ROLLCALL_BIND").filter(|v| !v.is_empty()) {
            self.server.bind = bind.parse().map_err(|_| {
                RollcallError::invalid_value("ROLLCALL_BIND", &bind, "expected HOST:PORT")
            })?;
        }

        Ok(())
    }

    /// Render the effective config as TOML (for `rollcall config show`)
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
