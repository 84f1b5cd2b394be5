use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use trim_engine::Trimmer;

use super::load_config;

pub fn handle(
    config_path: Option<&Path>,
    category: &str,
    input: Option<&Path>,
    report: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let trimmer = Trimmer::new(&config)?;

    let raw = read_payload(input)?;

    if report {
        let report = trimmer.process_with_report(category, &raw)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", trimmer.process(category, &raw)?);
    }

    Ok(())
}

/// Read the raw payload from a file, or stdin when no file is given
pub fn read_payload(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload from {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read payload from stdin")?;
            Ok(raw)
        }
    }
}
