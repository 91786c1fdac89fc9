use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};

pub fn handle(cli: &Cli) -> AppResult<()> {
    let config_path = Config::init_all(cli.config.as_deref().map(Path::new))?;

    let cache_dir: PathBuf = cli
        .cache_dir
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::cache_dir);
    fs::create_dir_all(&cache_dir)?;

    success(format!("Config file: {}", config_path.display()));
    success(format!("Cache dir:   {}", cache_dir.display()));
    Ok(())
}
