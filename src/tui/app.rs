//! Full-screen renderer state.

use super::ui;
use crate::console::notice_text;
use crate::frontend::{Notice, Renderer};
use anyhow::anyhow;
use ratatui::{Terminal, backend::Backend, style::Color};
use tictactoe_engine::{Board, Mark, Outcome};
use tracing::debug;

/// Keeps the last board and status line and redraws both on every change.
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
    board: Board,
    status: String,
    status_color: Color,
}

impl<B: Backend> TuiRenderer<B> {
    /// Creates a renderer drawing through `backend`.
    pub fn new(backend: B, size: usize) -> anyhow::Result<Self> {
        let terminal =
            Terminal::new(backend).map_err(|e| anyhow!("Failed to set up terminal: {e}"))?;
        Ok(Self {
            terminal,
            board: Board::new(size)?,
            status: String::new(),
            status_color: Color::Yellow,
        })
    }

    /// Returns the terminal, for inspecting a test backend.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let (board, status, color) = (&self.board, self.status.as_str(), self.status_color);
        self.terminal
            .draw(|frame| ui::draw(frame, board, status, color))
            .map_err(|e| anyhow!("Failed to draw frame: {e}"))?;
        Ok(())
    }
}

/// Status line text and colour for a notice.
fn status_line(notice: &Notice<'_>) -> (String, Color) {
    match notice {
        Notice::Turn(mark) => (
            format!("{mark}'s turn. Click a cell, q to quit."),
            mark_color(*mark),
        ),
        Notice::IllegalMove(e) => (format!("{e}. Pick another cell."), Color::LightRed),
        Notice::InvalidInput(e) => (e.to_string(), Color::LightRed),
        Notice::GameOver(outcome) => {
            let color = match outcome {
                Outcome::Win(mark) => mark_color(*mark),
                Outcome::Draw | Outcome::InProgress => Color::Yellow,
            };
            (format!("{} Press any key to exit.", notice_text(notice)), color)
        }
    }
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

impl<B: Backend> Renderer for TuiRenderer<B> {
    fn render(&mut self, board: &Board) -> anyhow::Result<()> {
        self.board = board.clone();
        self.redraw()
    }

    fn notify(&mut self, notice: Notice<'_>) -> anyhow::Result<()> {
        let (status, color) = status_line(&notice);
        debug!(%status, "Status changed");
        self.status = status;
        self.status_color = color;
        self.redraw()
    }
}
