//! Command-line interface for rewind_tictactoe.

use std::path::PathBuf;

use clap::Parser;

/// Rewind Tic-Tac-Toe - play, jump back, branch
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Tic-tac-toe with a rewindable move timeline", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write logs to (the terminal belongs to the UI)
    #[arg(long, default_value = "rewind_tictactoe.log")]
    pub log_file: PathBuf,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,
}
