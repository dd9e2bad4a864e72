//! Game outcome, derived from board state after each move.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Classification of a game after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and empty cells remain.
    InProgress,
    /// The given player completed a line.
    Win(Mark),
    /// Board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Human-readable result sentence for a finished game.
    pub fn summary(&self) -> Option<String> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win(mark) => Some(format!("{mark} has won!")),
            Outcome::Draw => Some("The game is a draw!".to_string()),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{mark} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
