//! devaudit library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use utils::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Repos { .. } => cli::commands::repos::handle(&cli.command, cfg),
        Commands::Apps { .. } => {
            cli::commands::apps::handle(&cli.command, cfg, cli.color.enabled())
        }
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, honoring --config
    let config_path: PathBuf = match &cli.config {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };
    let cfg = Config::load_from(&config_path)?;

    // 3️⃣ diagnostics on stderr
    ui::messages::set_styled(cli.color.enabled(), cli.color.enabled_stderr());
    utils::logging::init_logger(&cfg.log_level, cli.verbose, cli.color.enabled_stderr());
    tracing::debug!("Using configuration {}", config_path.display());

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
