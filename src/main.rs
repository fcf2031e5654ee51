// table-export - MySQL table to S3 CSV exporter
// Copyright (c) 2025 Table Export Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use table_export::cli::{Cli, Commands};
use table_export::config::load_logging_config;
use table_export::logging::init_logging;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let logging_config =
        match load_logging_config(cli.log_level.as_deref(), |name| std::env::var(name).ok()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Invalid logging configuration: {e}");
                process::exit(2);
            }
        };
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "table-export starting");

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Export(args) => args.execute().await,
        Commands::ValidateConfig(args) => args.execute().await,
    }
}
