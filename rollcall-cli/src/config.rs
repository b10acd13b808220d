use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rollcall_core::RollcallConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective config (file + environment overrides) as TOML
    Show,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
    }
}

fn run_path() -> Result<()> {
    println!("{}", RollcallConfig::config_path().display());
    Ok(())
}

fn run_show() -> Result<()> {
    let config = RollcallConfig::load().with_context(|| {
        format!(
            "Failed to load config from {}",
            RollcallConfig::config_path().display()
        )
    })?;
    let rendered = config
        .to_toml_string()
        .context("Failed to render config as TOML")?;
    print!("{rendered}");
    Ok(())
}
