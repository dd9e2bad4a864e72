//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: replaying the history onto an empty board never overwrites
/// a cell and reproduces the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let Ok(mut replayed) = Board::new(state.board().size()) else {
            return false;
        };

        for mov in state.history() {
            let pos = mov.position();
            // apply_move refuses occupied cells
            if replayed
                .apply_move(pos.row as i64, pos.col as i64, *mov.mark())
                .is_err()
            {
                return false;
            }
        }

        replayed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
