//! Alternating turn invariant: X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: history starts with X, never repeats a player and the
/// turn marker matches the number of moves played.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first() {
            if *first.mark() != Mark::X {
                return false;
            }
        }

        if history.windows(2).any(|pair| pair[0].mark() == pair[1].mark()) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 { Mark::X } else { Mark::O };
        state.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}
