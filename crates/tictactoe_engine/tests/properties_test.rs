//! Property tests for board queries over arbitrary sizes and move sequences.

use proptest::prelude::*;
use strum::IntoEnumIterator;
use tictactoe_engine::{Board, Mark, MoveError};

/// A board size together with a sequence of in-range coordinates.
fn size_and_moves() -> impl Strategy<Value = (usize, Vec<(i64, i64)>)> {
    (1usize..=6).prop_flat_map(|size| {
        let n = size as i64;
        (
            Just(size),
            prop::collection::vec((0..n, 0..n), 0..=size * size),
        )
    })
}

/// Plays the coordinates with alternating marks, skipping occupied cells.
fn fill(size: usize, moves: &[(i64, i64)]) -> Board {
    let mut board = Board::new(size).unwrap();
    let mut mark = Mark::X;
    for &(row, col) in moves {
        if board.apply_move(row, col, mark).is_ok() {
            mark = mark.opponent();
        }
    }
    board
}

proptest! {
    #[test]
    fn fresh_board_is_empty(size in 1usize..=8) {
        let board = Board::new(size).unwrap();
        prop_assert!(!board.is_full());
        for mark in Mark::iter() {
            prop_assert!(!board.is_winner(mark));
        }
    }

    #[test]
    fn occupancy_is_monotonic((size, moves) in size_and_moves()) {
        let mut board = Board::new(size).unwrap();
        let mut mark = Mark::X;
        for (row, col) in moves {
            if board.is_legal_move(row, col) {
                board.apply_move(row, col, mark).unwrap();
                prop_assert!(!board.is_legal_move(row, col));
                mark = mark.opponent();
            }
        }
    }

    #[test]
    fn out_of_bounds_always_signalled(
        (size, moves) in size_and_moves(),
        row_offset in 0i64..10,
        col in -10i64..10,
        negative in any::<bool>(),
    ) {
        let mut board = fill(size, &moves);
        let n = size as i64;
        let row = if negative { -1 - row_offset } else { n + row_offset };

        let err = board.apply_move(row, col, Mark::X).unwrap_err();
        prop_assert_eq!(err, MoveError::OutOfBounds { row, col, size });
        let err = board.apply_move(col, row, Mark::O).unwrap_err();
        prop_assert!(err.is_out_of_bounds());
    }

    #[test]
    fn occupied_always_signalled((size, moves) in size_and_moves()) {
        let mut board = fill(size, &moves);
        for row in 0..size {
            for col in 0..size {
                if board.get(row, col).is_some_and(|c| !c.is_empty()) {
                    let err = board.apply_move(row as i64, col as i64, Mark::O).unwrap_err();
                    prop_assert_eq!(err, MoveError::CellOccupied { row, col });
                }
            }
        }
    }

    #[test]
    fn queries_are_idempotent((size, moves) in size_and_moves()) {
        let board = fill(size, &moves);
        for mark in Mark::iter() {
            let first = (board.is_winner(mark), board.is_full(), board.outcome(mark));
            let second = (board.is_winner(mark), board.is_full(), board.outcome(mark));
            prop_assert_eq!(first, second);
        }
    }
}
