//! Tictactoe - one game per run, console or full-screen.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Mode};
use std::io;
use std::path::Path;
use tictactoe::{ConsoleInput, ConsoleRenderer, FileResultSink, Orchestrator, SessionEnd};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let size = usize::from(cli.size);
    let sink = FileResultSink::new(&cli.results);
    info!(mode = ?cli.mode, size, results = %cli.results.display(), "Starting tictactoe");

    let end = match cli.mode {
        Mode::Console => run_console(size, sink)?,
        Mode::Tui => tictactoe::tui::run(size, sink)?,
    };

    info!(?end, "Session ended");
    Ok(())
}

/// Logs to a file so output never mixes with the board.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Run one game with prompts on stdin/stdout
#[instrument(skip(sink))]
fn run_console(size: usize, sink: FileResultSink) -> Result<SessionEnd> {
    let input = ConsoleInput::new(io::stdin().lock(), io::stdout());
    let renderer = ConsoleRenderer::new(io::stdout());
    let mut game = Orchestrator::new(size, input, renderer, sink)?;
    game.run()
}
