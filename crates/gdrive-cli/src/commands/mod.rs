//! CLI command definitions and dispatch.

pub mod info;
pub mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gdrive_common::config::GdriveConfig;
use gdrive_common::constants;

/// gdrive — list and inspect drive files.
#[derive(Parser, Debug)]
#[command(name = "gdrive", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to the config file (defaults to ~/.gdrive/config.json).
    #[arg(long, global = true, env = "GDRIVE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List files.
    List(list::ListArgs),
    /// Show file info.
    Info(info::InfoArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the command fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(constants::default_config_file);
    let config = GdriveConfig::load(&config_path)?;

    match cli.command {
        Command::List(args) => list::execute(args, &config),
        Command::Info(args) => info::execute(args, &config),
    }
}
