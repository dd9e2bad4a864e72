//! Square playing field with move legality and outcome queries.

use super::error::{BoardError, MoveError};
use super::rules;
use super::{Cell, Mark, Outcome, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// Side length of a standard board.
pub const DEFAULT_SIZE: usize = 3;

/// Largest supported side length.
pub const MAX_SIZE: usize = 32;

/// N x N tic-tac-toe board.
///
/// Cells are stored in row-major order. The size is fixed at
/// construction and a cell goes from `Empty` to `Marked` at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub(crate) size: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// The side length must lie in `1..=MAX_SIZE`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at the given coordinate, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Validates a move, returning the position or the reason it is illegal.
    ///
    /// Bounds are checked before occupancy.
    pub fn check_move(&self, row: i64, col: i64) -> Result<Position, MoveError> {
        let in_range = |v: i64| usize::try_from(v).ok().filter(|&v| v < self.size);

        let (Some(r), Some(c)) = (in_range(row), in_range(col)) else {
            return Err(MoveError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        };

        if !self.cells[r * self.size + c].is_empty() {
            return Err(MoveError::CellOccupied { row: r, col: c });
        }

        Ok(Position::new(r, c))
    }

    /// Returns true if the coordinate is on the board and empty.
    pub fn is_legal_move(&self, row: i64, col: i64) -> bool {
        self.check_move(row, col).is_ok()
    }

    /// Places `mark` at the given coordinate.
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfBounds` if the coordinate is off the grid,
    /// `MoveError::CellOccupied` if the cell already holds a mark.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn apply_move(&mut self, row: i64, col: i64, mark: Mark) -> Result<Position, MoveError> {
        let pos = self.check_move(row, col).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;
        self.cells[pos.row * self.size + pos.col] = Cell::Marked(mark);
        debug!(%pos, %mark, "Mark placed");
        Ok(pos)
    }

    /// Returns true if `mark` fills any row, column or diagonal.
    pub fn is_winner(&self, mark: Mark) -> bool {
        rules::is_winner(self, mark)
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Classifies the board after `just_moved` played.
    pub fn outcome(&self, just_moved: Mark) -> Outcome {
        rules::outcome(self, just_moved)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![Cell::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(Board::new(MAX_SIZE).is_ok());
        assert_eq!(
            Board::new(MAX_SIZE + 1),
            Err(BoardError::InvalidSize { size: MAX_SIZE + 1 })
        );
        let huge = usize::MAX;
        assert_eq!(Board::new(huge), Err(BoardError::InvalidSize { size: huge }));
    }

    #[test]
    fn test_default_is_three_by_three() {
        let board = Board::default();
        assert_eq!(board.size(), 3);
        assert_eq!(board.cells().len(), 9);
        assert_eq!(board, Board::new(3).unwrap());
    }

    #[test]
    fn test_check_move_negative_is_out_of_bounds() {
        let board = Board::default();
        assert_eq!(
            board.check_move(-1, 0),
            Err(MoveError::OutOfBounds { row: -1, col: 0, size: 3 })
        );
        assert!(board.check_move(0, 3).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn test_apply_then_occupied() {
        let mut board = Board::default();
        let pos = board.apply_move(1, 2, Mark::X).unwrap();
        assert_eq!(pos, Position::new(1, 2));
        assert_eq!(board.get(1, 2), Some(Cell::Marked(Mark::X)));
        assert!(!board.is_legal_move(1, 2));
        assert_eq!(
            board.apply_move(1, 2, Mark::O),
            Err(MoveError::CellOccupied { row: 1, col: 2 })
        );
        assert_eq!(board.get(1, 2), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn test_out_of_bounds_wins_over_occupied() {
        let mut board = Board::new(1).unwrap();
        board.apply_move(0, 0, Mark::X).unwrap();
        assert!(board.check_move(0, 1).unwrap_err().is_out_of_bounds());
        assert!(board.check_move(0, 0).unwrap_err().is_occupied());
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut board = Board::default();
        board.apply_move(2, 0, Mark::O).unwrap();
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0], Cell::Marked(Mark::O));
        assert!(rows[0].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::default();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_serializes_cells() {
        let mut board = Board::new(2).unwrap();
        board.apply_move(0, 1, Mark::O).unwrap();
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["size"], 2);
        assert_eq!(json["cells"][1]["Marked"], "O");
        assert_eq!(json["cells"][0], "Empty");
    }
}
