//! Bitácora library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod remote;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use remote::cache::SnapshotCache;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cache: &SnapshotCache) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cli, cfg),
        Commands::General { .. } => cli::commands::general::handle(&cli.command, cfg, cache),
        Commands::Today { .. } => cli::commands::today::handle(&cli.command, cfg, cache),
        Commands::Reload => cli::commands::reload::handle(cache),
        Commands::Form => cli::commands::form::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // RUST_LOG-gated diagnostics; user-facing output goes through ui::messages.
    env_logger::try_init().ok();

    let cli = Cli::parse();

    let cfg = Config::load(cli.config.as_deref().map(Path::new))?;

    let cache_dir: PathBuf = cli
        .cache_dir
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::cache_dir);
    let cache = SnapshotCache::new(cache_dir, cfg.cache_ttl_secs);

    dispatch(&cli, &cfg, &cache)
}
