//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; board storage lives in `board.rs`.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::is_winner;

use super::{Board, Mark, Outcome};
use tracing::instrument;

/// Classifies the board after `just_moved` played.
///
/// A win is checked before a full board so that a winning final move
/// is never reported as a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn outcome(board: &Board, just_moved: Mark) -> Outcome {
    if is_winner(board, just_moved) {
        Outcome::Win(just_moved)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
