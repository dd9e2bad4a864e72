//! Tic-tac-toe board engine.
//!
//! Pure game logic with no I/O: an N x N board, move legality,
//! win and draw detection, and the per-session state (turn marker and
//! move history) that a game loop drives.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameState, Mark, Outcome};
//!
//! let mut game = GameState::new(3)?;
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.play(row, col)?;
//! }
//! assert_eq!(game.play(0, 2)?, Outcome::Win(Mark::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod outcome;
mod rules;
mod state;
mod types;

pub mod invariants;

pub use action::Move;
pub use board::{Board, DEFAULT_SIZE, MAX_SIZE};
pub use error::{BoardError, MoveError};
pub use outcome::Outcome;
pub use state::GameState;
pub use types::{Cell, Mark, Position};
