//! Scripted games on a 3x3 board.

use strum::IntoEnumIterator;
use tictactoe_engine::{Board, GameState, Mark, MoveError, Outcome};

fn play_all(moves: &[(i64, i64, Mark)]) -> Board {
    let mut board = Board::default();
    for &(row, col, mark) in moves {
        board.apply_move(row, col, mark).expect("legal move");
    }
    board
}

#[test]
fn test_top_row_win() {
    let board = play_all(&[
        (0, 0, Mark::X),
        (1, 0, Mark::O),
        (0, 1, Mark::X),
        (1, 1, Mark::O),
        (0, 2, Mark::X),
    ]);

    assert!(board.is_winner(Mark::X));
    assert!(!board.is_winner(Mark::O));
    assert_eq!(board.outcome(Mark::X), Outcome::Win(Mark::X));
}

#[test]
fn test_full_board_draw() {
    let board = play_all(&[
        (0, 0, Mark::X),
        (0, 1, Mark::O),
        (0, 2, Mark::X),
        (1, 0, Mark::X),
        (1, 1, Mark::O),
        (1, 2, Mark::O),
        (2, 0, Mark::O),
        (2, 1, Mark::X),
        (2, 2, Mark::X),
    ]);

    assert!(board.is_full());
    for mark in Mark::iter() {
        assert!(!board.is_winner(mark));
    }
    assert_eq!(board.outcome(Mark::X), Outcome::Draw);
}

#[test]
fn test_diagonal_win() {
    let board = play_all(&[
        (0, 0, Mark::X),
        (0, 1, Mark::O),
        (1, 1, Mark::X),
        (0, 2, Mark::O),
        (2, 2, Mark::X),
    ]);

    assert!(board.is_winner(Mark::X));
    assert_eq!(board.outcome(Mark::X), Outcome::Win(Mark::X));
}

#[test]
fn test_session_replays_to_win_for_o() {
    let mut game = GameState::new(3).unwrap();
    let moves = [(0, 0), (1, 0), (2, 2), (1, 1), (0, 2)];
    for (row, col) in moves {
        assert_eq!(game.play(row, col).unwrap(), Outcome::InProgress);
    }

    assert_eq!(game.to_move(), Mark::O);
    assert_eq!(game.play(1, 2).unwrap(), Outcome::Win(Mark::O));
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_session_reports_specific_rejection() {
    let mut game = GameState::new(3).unwrap();
    game.play(2, 2).unwrap();

    assert_eq!(
        game.play(3, 0),
        Err(MoveError::OutOfBounds { row: 3, col: 0, size: 3 })
    );
    assert_eq!(game.play(2, 2), Err(MoveError::CellOccupied { row: 2, col: 2 }));
    assert_eq!(game.to_move(), Mark::O);
}
