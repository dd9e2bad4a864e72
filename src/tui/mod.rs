//! Full-screen terminal frontend: mouse-driven board drawn on a canvas.

mod app;
mod input;
mod ui;

pub use app::TuiRenderer;
pub use input::{TuiInput, cell_at, translate};
pub use ui::{board_area, board_inner};

use crate::orchestrator::{Orchestrator, SessionEnd};
use crate::results::ResultSink;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;
use std::io;
use tracing::{debug, info, instrument};

/// Puts the terminal into raw, alternate-screen, mouse-capture mode and
/// restores it on drop.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Enters full-screen mode.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // Dropped on the error path below, leaving raw mode again.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        debug!("Terminal in full-screen mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}

/// Plays one session in full-screen mode.
///
/// After a finished game the final board stays on screen until a key is
/// pressed. The terminal is restored on every exit path.
#[instrument(skip(sink))]
pub fn run<S: ResultSink>(size: usize, sink: S) -> Result<SessionEnd> {
    info!("Starting full-screen session");
    let _guard = TerminalGuard::enter()?;

    let renderer = TuiRenderer::new(CrosstermBackend::new(io::stdout()), size)?;
    let mut game = Orchestrator::new(size, TuiInput::new(), renderer, sink)?;
    let end = game.run()?;

    if let SessionEnd::Finished(_) = end {
        input::wait_for_key().context("Failed to wait for key press")?;
    }
    Ok(end)
}
