pub mod categories;
pub mod config;
pub mod optimize;
pub mod process;

use anyhow::Result;
use std::path::{Path, PathBuf};
use trim_config::Config;

/// Load the config from an explicit path, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    tracing::debug!(path = %config_location(path).display(), "loading config");
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Explicit config path or the default location
pub fn config_location(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(Config::config_path)
}
