//! Session state: board, turn marker and move history.

use super::action::Move;
use super::error::{BoardError, MoveError};
#[cfg(debug_assertions)]
use super::invariants::{GameInvariants, InvariantSet};
use super::{Board, Mark, Outcome};
use tracing::{debug, instrument};

/// State of one game session.
///
/// X always moves first and the turn flips after every accepted move.
/// The outcome is never stored; it is derived from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Starts a session on an empty board of the given size.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            to_move: Mark::X,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome after the most recent move.
    pub fn outcome(&self) -> Outcome {
        match self.history.last() {
            Some(last) => self.board.outcome(*last.mark()),
            None => Outcome::InProgress,
        }
    }

    /// Plays the current player's mark at the given coordinate.
    ///
    /// On success the move is recorded, the turn passes to the opponent
    /// and the derived outcome is returned. A rejected move leaves the
    /// state untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, row: i64, col: i64) -> Result<Outcome, MoveError> {
        let mark = self.to_move;
        let position = self.board.apply_move(row, col, mark)?;
        let mov = Move::new(mark, position);
        self.history.push(mov);
        self.to_move = mark.opponent();

        #[cfg(debug_assertions)]
        if let Err(violations) = GameInvariants::check_all(self) {
            let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
            panic!("Invariant violation after {mov}: {}", descriptions.join("; "));
        }

        let outcome = self.board.outcome(mark);
        debug!(%mov, %outcome, moves = self.history.len(), "Move accepted");
        Ok(outcome)
    }
}
