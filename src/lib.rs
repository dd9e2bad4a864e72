//! Tic-tac-toe for two players sharing one terminal.
//!
//! # Architecture
//!
//! - **Engine** (`tictactoe_engine`): board, legality, win and draw rules
//! - **Orchestrator**: the game loop; sequences turns and talks to collaborators
//! - **Frontends**: line-based console and full-screen mouse-driven TUI
//! - **Results**: append-only results file
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{ConsoleInput, ConsoleRenderer, FileResultSink, Orchestrator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let input = ConsoleInput::new(std::io::stdin().lock(), std::io::stdout());
//! let renderer = ConsoleRenderer::new(std::io::stdout());
//! let mut game = Orchestrator::new(3, input, renderer, FileResultSink::default())?;
//! game.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod error;
mod frontend;
mod orchestrator;
mod results;

pub mod tui;

pub use console::{ConsoleInput, ConsoleRenderer, format_board, notice_text};
pub use error::InputError;
pub use frontend::{InputEvent, MoveSource, Notice, Renderer};
pub use orchestrator::{Orchestrator, Phase, SessionEnd};
pub use results::{DEFAULT_RESULTS_FILE, FileResultSink, ResultSink, SinkError};

pub use tictactoe_engine::{Board, Cell, GameState, MAX_SIZE, Mark, MoveError, Outcome, Position};
