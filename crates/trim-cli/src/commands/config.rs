use anyhow::Result;
use std::path::Path;
use trim_config::Config;

use super::{config_location, load_config};
use crate::cli::ConfigCommands;

pub fn handle(cmd: ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config_path),
        ConfigCommands::Path => {
            println!("{}", config_location(config_path).display());
            Ok(())
        }
        ConfigCommands::Init { force } => init(config_path, force),
    }
}

fn show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_location(config_path);
    write_defaults(&path, force)?;

    println!("✓ Created {}", path.display());
    Ok(())
}

/// Write the explicit default config, refusing to clobber unless forced
fn write_defaults(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::explicit_defaults().save(path)
}
