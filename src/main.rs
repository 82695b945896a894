//! Latvju Desinas - terminal tic-tac-toe.

#![warn(missing_docs)]

use std::io;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

use desinas::{Cli, FactProvider, GameController, HistoryLog};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file; stdout belongs to the alternate screen.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting Latvju Desinas");

    let history = HistoryLog::open(cli.db_path.clone())?;
    let facts = FactProvider::new(
        cli.fact_url.clone(),
        Duration::from_secs(cli.fact_timeout_secs),
    )?;
    let mut controller = GameController::new(history, facts);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {}", err);
    }
    res
}
