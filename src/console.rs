//! Line-oriented console frontend.

use crate::error::InputError;
use crate::frontend::{InputEvent, MoveSource, Notice, Renderer};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Cell, Mark, MoveError};
use tracing::{debug, instrument};

/// Words that end the session when typed at a prompt.
const QUIT_WORDS: [&str; 2] = ["q", "quit"];

/// Reads a row and a column per move from a line-based reader.
pub struct ConsoleInput<R, W> {
    reader: R,
    prompt: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates a console input reading from `reader` and prompting on `prompt`.
    pub fn new(reader: R, prompt: W) -> Self {
        Self { reader, prompt }
    }

    /// Prompts and reads one integer. `Ok(None)` means quit or end of input.
    ///
    /// Bytes that are not valid UTF-8 are decoded lossily so they surface
    /// as a parse failure rather than a stream error.
    fn read_number(&mut self, label: &str) -> Result<Option<i64>, InputError> {
        write!(self.prompt, "Enter the number of the {label}: ")?;
        self.prompt.flush()?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&line);
        let text = line.trim();
        if QUIT_WORDS.iter().any(|w| text.eq_ignore_ascii_case(w)) {
            return Ok(None);
        }

        text.parse::<i64>()
            .map(Some)
            .map_err(|_| InputError::NotAnInteger { input: text.to_string() })
    }

    /// Reads one coordinate and rejects it before the next prompt when it
    /// falls outside the board.
    fn read_coordinate(&mut self, label: &str, size: usize) -> Result<Option<i64>, InputError> {
        let Some(value) = self.read_number(label)? else {
            return Ok(None);
        };
        if usize::try_from(value).is_ok_and(|v| v < size) {
            Ok(Some(value))
        } else {
            Err(InputError::OutOfRange { value, size })
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    #[instrument(skip(self, board))]
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<InputEvent, InputError> {
        let Some(row) = self.read_coordinate("row", board.size())? else {
            return Ok(InputEvent::Quit);
        };
        let Some(col) = self.read_coordinate("column", board.size())? else {
            return Ok(InputEvent::Quit);
        };
        Ok(InputEvent::Place { row, col })
    }
}

/// Prints the board as text and messages as plain lines.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Formats the grid: cells joined by `|`, a dash separator between rows
/// and an empty line after the last row.
pub fn format_board(board: &Board) -> String {
    let width = board.size() * 2 - 1;
    let last = board.size() - 1;
    let mut text = String::new();

    for (i, row) in board.rows().enumerate() {
        let symbols: Vec<String> = row.iter().map(|cell| cell_symbol(*cell).to_string()).collect();
        text.push_str(&symbols.join("|"));
        text.push('\n');
        if i < last {
            text.push_str(&"-".repeat(width));
        }
        text.push('\n');
    }
    text
}

fn cell_symbol(cell: Cell) -> char {
    cell.mark().map_or(' ', Mark::symbol)
}

/// Text shown to the player for a notice.
pub fn notice_text(notice: &Notice<'_>) -> String {
    match notice {
        Notice::Turn(mark) => format!("< {mark}'s turn!"),
        Notice::IllegalMove(MoveError::OutOfBounds { size, .. })
        | Notice::InvalidInput(InputError::OutOfRange { size, .. }) => format!(
            "Values must be in the range from 0 to {}.\nPlease try again.",
            size - 1
        ),
        Notice::IllegalMove(MoveError::CellOccupied { .. }) => {
            "The cell is already occupied. Please try again.".to_string()
        }
        Notice::InvalidInput(InputError::NotAnInteger { .. }) => {
            "Value must be an integer. Please try again.".to_string()
        }
        Notice::InvalidInput(e) => format!("Unexpected error: {e}"),
        Notice::GameOver(outcome) => outcome.summary().unwrap_or_default(),
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, board: &Board) -> anyhow::Result<()> {
        write!(self.out, "{}", format_board(board))?;
        self.out.flush()?;
        Ok(())
    }

    fn notify(&mut self, notice: Notice<'_>) -> anyhow::Result<()> {
        writeln!(self.out, "{}", notice_text(&notice))?;
        self.out.flush()?;
        Ok(())
    }
}
