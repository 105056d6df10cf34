//! Rewind Tic-Tac-Toe - terminal client.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tictactoe::cli::Cli;
use rewind_tictactoe::tui;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.quiet {
        init_tracing(&cli.log_file)?;
    }

    info!("Starting Rewind Tic-Tac-Toe");
    tui::run_tui()
}

/// Logs to a file so output never fights the alternate screen.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
