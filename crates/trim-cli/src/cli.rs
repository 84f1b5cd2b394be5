use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trimmer")]
#[command(about = "Compact catalog responses for narrow-bandwidth channels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: config.toml in the platform config directory)
    #[arg(long, global = true, env = "TRIMMER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Trim a raw catalog response
    Process {
        /// Product category (e.g., DATA, VOICE_SMS, VF)
        category: String,

        /// File holding the raw JSON response (default: stdin)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Print a JSON report with stage counts instead of the bare payload
        #[arg(long)]
        report: bool,
    },

    /// List supported categories
    Categories,

    /// Optimize a single quota description
    Optimize {
        /// Quota text to shorten
        quota: String,

        /// Show which rewrite rules fired
        #[arg(long)]
        rules: bool,
    },

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a config file with every default spelled out
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
