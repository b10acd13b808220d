//! HTTP server command

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use rollcall_server::db::{create_pool_with_options, migrations};
use rollcall_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: from config, else 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let rollcall = super::resolve_config(args.database_url)?;

    let mut config = ServerConfig::from(&rollcall);
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    tracing::info!(
        database = %rollcall.database.url,
        "Starting rollcall server on {}",
        config.bind_addr
    );

    let pool = create_pool_with_options(&rollcall.database.url, rollcall.database.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", rollcall.database.url))?;

    // Tables are created on startup if absent
    migrations::run(&pool)
        .await
        .context("Failed to create database schema")?;

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
