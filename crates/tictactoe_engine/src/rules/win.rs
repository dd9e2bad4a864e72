//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// Checks whether `mark` owns a complete line.
///
/// Rows are checked first, then columns, then both diagonals.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    let n = board.size();
    let owns = |row: usize, col: usize| board.get(row, col) == Some(Cell::Marked(mark));

    let row_complete = (0..n).any(|row| (0..n).all(|col| owns(row, col)));
    let col_complete = (0..n).any(|col| (0..n).all(|row| owns(row, col)));
    let main_diagonal = (0..n).all(|i| owns(i, i));
    let anti_diagonal = (0..n).all(|i| owns(i, n - 1 - i));

    row_complete || col_complete || main_diagonal || anti_diagonal
}
