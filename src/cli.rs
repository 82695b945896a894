//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::facts::DEFAULT_FACT_URL;

/// Latvju Desinas - sausage-themed tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "desinas")]
#[command(about = "Sausage-themed tic-tac-toe with match history and fun facts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the match-history database (created if it doesn't exist)
    #[arg(long, default_value = "game_history.db")]
    pub db_path: String,

    /// Endpoint for the end-screen fun fact
    #[arg(long, default_value = DEFAULT_FACT_URL)]
    pub fact_url: String,

    /// Timeout for the fun-fact fetch, in seconds
    #[arg(long, default_value = "5")]
    pub fact_timeout_secs: u64,

    /// File to write tracing output to (stdout is owned by the TUI)
    #[arg(long, default_value = "desinas.log")]
    pub log_file: PathBuf,
}
