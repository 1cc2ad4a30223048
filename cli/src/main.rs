//! Droid debconf database plugin

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use droid_debconfdb::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries messages and the host report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
