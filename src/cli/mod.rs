//! CLI interface and argument parsing

pub mod commands;

use clap::{Parser, Subcommand};

/// Export a MySQL table to a timestamped CSV object in S3
#[derive(Parser, Debug)]
#[command(name = "table-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one export: query the table and upload the CSV
    Export(commands::export::ExportArgs),

    /// Check which environment variables are set
    ValidateConfig(commands::validate::ValidateArgs),
}
