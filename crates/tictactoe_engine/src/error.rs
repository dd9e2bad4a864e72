//! Error types for board construction and moves.

use derive_more::{Display, Error};

/// Error returned when a board cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Board size must lie in `1..=MAX_SIZE`.
    #[display("Board size must be between 1 and {}, got {size}", crate::MAX_SIZE)]
    InvalidSize {
        /// Requested size.
        size: usize,
    },
}

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row or column lies outside the grid.
    #[display("Position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
        /// Side length of the board.
        size: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },
}

impl MoveError {
    /// Returns true for out-of-bounds rejections.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, MoveError::OutOfBounds { .. })
    }

    /// Returns true for occupied-cell rejections.
    pub fn is_occupied(&self) -> bool {
        matches!(self, MoveError::CellOccupied { .. })
    }
}
