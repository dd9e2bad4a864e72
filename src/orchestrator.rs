//! Game loop: turn sequencing between the board engine and collaborators.

use crate::frontend::{InputEvent, MoveSource, Notice, Renderer};
use crate::results::ResultSink;
use anyhow::{Context, Result};
use tictactoe_engine::{BoardError, GameState, Mark, Move, Outcome, Position};
use tracing::{debug, info, instrument, warn};

/// Where the loop currently is within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the given player to supply a legal move.
    AwaitingMove(Mark),
    /// A move was placed; the outcome is not yet evaluated.
    MoveApplied(Move),
    /// Terminal: the game was won or drawn.
    GameOver(Outcome),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Played to a win or a draw; the result was recorded.
    Finished(Outcome),
    /// The player quit; nothing was recorded.
    Quit,
}

/// Drives one game session to completion or quit.
pub struct Orchestrator<I, R, S> {
    game: GameState,
    input: I,
    renderer: R,
    sink: S,
}

impl<I, R, S> Orchestrator<I, R, S>
where
    I: MoveSource,
    R: Renderer,
    S: ResultSink,
{
    /// Creates a loop over an empty board of the given size.
    #[instrument(skip(input, renderer, sink))]
    pub fn new(size: usize, input: I, renderer: R, sink: S) -> Result<Self, BoardError> {
        Ok(Self {
            game: GameState::new(size)?,
            input,
            renderer,
            sink,
        })
    }

    /// Returns the session state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Returns the input source.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the result sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs the session.
    ///
    /// Malformed input and illegal moves are reported and retried.
    /// A quit request ends the session at once without recording a result.
    #[instrument(skip(self), fields(size = self.game.board().size()))]
    pub fn run(&mut self) -> Result<SessionEnd> {
        info!("Starting game session");
        self.renderer.render(self.game.board())?;

        let mut phase = Phase::AwaitingMove(self.game.to_move());
        loop {
            debug!(?phase, "Entering phase");
            phase = match phase {
                Phase::AwaitingMove(mark) => {
                    self.renderer.notify(Notice::Turn(mark))?;
                    match self.solicit(mark)? {
                        Some(position) => Phase::MoveApplied(self.apply(position)?),
                        None => {
                            info!(moves = self.game.history().len(), "Player quit");
                            return Ok(SessionEnd::Quit);
                        }
                    }
                }
                Phase::MoveApplied(mov) => {
                    self.renderer.render(self.game.board())?;
                    let outcome = self.game.board().outcome(*mov.mark());
                    if outcome.is_over() {
                        Phase::GameOver(outcome)
                    } else {
                        Phase::AwaitingMove(mov.mark().opponent())
                    }
                }
                Phase::GameOver(outcome) => {
                    self.finish(outcome)?;
                    return Ok(SessionEnd::Finished(outcome));
                }
            };
        }
    }

    /// Asks for moves until a legal one arrives, or `None` on quit.
    fn solicit(&mut self, mark: Mark) -> Result<Option<Position>> {
        loop {
            match self.input.next_move(self.game.board(), mark) {
                Ok(InputEvent::Place { row, col }) => {
                    match self.game.board().check_move(row, col) {
                        Ok(position) => return Ok(Some(position)),
                        Err(e) => {
                            debug!(error = %e, "Illegal move, asking again");
                            self.renderer.notify(Notice::IllegalMove(&e))?;
                        }
                    }
                }
                Ok(InputEvent::Resized) => {
                    debug!("Display resized, redrawing");
                    self.renderer.render(self.game.board())?;
                }
                Ok(InputEvent::Quit) => return Ok(None),
                Err(e) if e.is_recoverable() => {
                    debug!(error = %e, "Invalid input, asking again");
                    self.renderer.notify(Notice::InvalidInput(&e))?;
                }
                Err(e) => {
                    warn!(error = %e, "Input failed");
                    return Err(e).context("Input source failed");
                }
            }
        }
    }

    fn apply(&mut self, position: Position) -> Result<Move> {
        self.game.play(position.row as i64, position.col as i64)?;
        self.game
            .history()
            .last()
            .copied()
            .context("Accepted move missing from history")
    }

    fn finish(&mut self, outcome: Outcome) -> Result<()> {
        let Some(summary) = outcome.summary() else {
            return Ok(());
        };
        info!(
            %outcome,
            winner = ?outcome.winner(),
            moves = self.game.history().len(),
            "Game over"
        );
        if let Ok(json) = serde_json::to_string(self.game.board()) {
            debug!(board = %json, "Final board");
        }

        self.renderer.notify(Notice::GameOver(outcome))?;
        self.sink.record(&summary)?;
        Ok(())
    }
}

