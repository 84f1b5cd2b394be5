use anyhow::Result;
use std::path::Path;
use trim_engine::Trimmer;

use super::load_config;

pub fn handle(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let trimmer = Trimmer::new(&config)?;
    let factory = trimmer.factory();

    println!("Categories:");
    for category in factory.supported_categories() {
        let spec = factory.select(category.as_str())?;
        println!(
            "  {:<14} {:<10} list: {}, amount: {}",
            category.as_str(),
            spec.kind.as_str(),
            spec.list_field,
            spec.amount_field
        );
    }
    println!("\nOptimization threshold: {} chars", trimmer.threshold_chars());

    Ok(())
}
