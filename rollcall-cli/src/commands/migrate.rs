//! Schema creation without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use rollcall_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config/environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the student, course and enrollment tables if absent
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = super::resolve_config(args.database_url)?;

    let pool = create_pool(&config.database.url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;

    migrations::run(&pool)
        .await
        .context("Failed to create database schema")?;
    pool.close().await;

    println!("Schema ready at {}", config.database.url);
    Ok(())
}
