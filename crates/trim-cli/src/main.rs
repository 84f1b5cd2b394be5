mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the payload
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        cli::Commands::Process {
            category,
            input,
            report,
        } => commands::process::handle(config_path, &category, input.as_deref(), report),
        cli::Commands::Categories => commands::categories::handle(config_path),
        cli::Commands::Optimize { quota, rules } => commands::optimize::handle(&quota, rules),
        cli::Commands::Config(config_cmd) => commands::config::handle(config_cmd, config_path),
    }
}
