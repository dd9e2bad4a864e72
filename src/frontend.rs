//! Collaborator traits the game loop drives.
//!
//! The loop never touches a terminal or a file directly. Input, rendering
//! and result persistence are injected, so the loop runs headless in tests.

use crate::error::InputError;
use tictactoe_engine::{Board, Mark, MoveError, Outcome};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Place the current mark at a coordinate. Not yet validated.
    Place {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
    /// The display area changed; redraw before asking again.
    Resized,
    /// End the session immediately without recording a result.
    Quit,
}

/// Source of moves (keyboard, mouse, script).
pub trait MoveSource {
    /// Blocks until the player supplies a move or asks to quit.
    ///
    /// Errors for which `InputError::is_recoverable` holds are reported
    /// and the loop asks again. Any other error ends the session.
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<InputEvent, InputError>;
}

/// Message for the player.
#[derive(Debug, Clone, Copy)]
pub enum Notice<'a> {
    /// A new turn begins.
    Turn(Mark),
    /// The requested move was rejected by the board.
    IllegalMove(&'a MoveError),
    /// The input could not be parsed.
    InvalidInput(&'a InputError),
    /// The game has ended.
    GameOver(Outcome),
}

/// Presents the board and messages to the player.
pub trait Renderer {
    /// Draws the current board.
    fn render(&mut self, board: &Board) -> anyhow::Result<()>;

    /// Shows a message.
    fn notify(&mut self, notice: Notice<'_>) -> anyhow::Result<()>;
}
