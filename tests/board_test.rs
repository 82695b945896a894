//! Tests for the board model: placement and terminal-state evaluation.

use desinas::{Board, Cell, Mark, PlaceError, Verdict};

/// The 8 winning lines as (row, col) triples.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[test]
fn test_empty_board_is_ongoing() {
    let board = Board::new();
    assert_eq!(board.evaluate(), Verdict::Ongoing);
}

#[test]
fn test_every_line_wins_for_player() {
    for line in &LINES {
        let mut board = Board::new();
        for &(row, col) in line {
            board.place(row, col, Mark::Player).expect("Place failed");
        }
        assert_eq!(
            board.evaluate(),
            Verdict::Winner(Mark::Player),
            "line {line:?} should win"
        );
    }
}

#[test]
fn test_every_line_wins_for_opponent() {
    for line in &LINES {
        let mut board = Board::new();
        for &(row, col) in line {
            board.place(row, col, Mark::Opponent).expect("Place failed");
        }
        assert_eq!(board.evaluate(), Verdict::Winner(Mark::Opponent));
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    // P O P
    // P O O
    // O P P
    let mut board = Board::new();
    let marks = [
        (0, 0, Mark::Player),
        (0, 1, Mark::Opponent),
        (0, 2, Mark::Player),
        (1, 0, Mark::Player),
        (1, 1, Mark::Opponent),
        (1, 2, Mark::Opponent),
        (2, 0, Mark::Opponent),
        (2, 1, Mark::Player),
        (2, 2, Mark::Player),
    ];
    for (row, col, mark) in marks {
        board.place(row, col, mark).expect("Place failed");
    }
    assert_eq!(board.evaluate(), Verdict::Draw);
}

#[test]
fn test_place_rejects_occupied_cell() {
    let mut board = Board::new();
    board.place(1, 1, Mark::Player).expect("Place failed");
    let err = board.place(1, 1, Mark::Opponent).unwrap_err();
    assert_eq!(err, PlaceError::Occupied { row: 1, col: 1 });
    // The original mark stays in place.
    assert_eq!(board.cell(1, 1), Some(Cell::Occupied(Mark::Player)));
}

#[test]
fn test_place_rejects_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(
        board.place(3, 0, Mark::Player),
        Err(PlaceError::OutOfBounds { row: 3, col: 0 })
    );
    assert_eq!(
        board.place(0, 3, Mark::Player),
        Err(PlaceError::OutOfBounds { row: 0, col: 3 })
    );
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_reset_clears_all_cells() {
    let mut board = Board::new();
    board.place(0, 0, Mark::Player).expect("Place failed");
    board.place(2, 2, Mark::Opponent).expect("Place failed");
    board.reset();
    assert_eq!(board, Board::new());
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_first_empty_scans_row_major() {
    let mut board = Board::new();
    assert_eq!(board.first_empty(), Some((0, 0)));
    board.place(0, 0, Mark::Player).expect("Place failed");
    assert_eq!(board.first_empty(), Some((0, 1)));
    board.place(0, 1, Mark::Opponent).expect("Place failed");
    board.place(0, 2, Mark::Player).expect("Place failed");
    assert_eq!(board.first_empty(), Some((1, 0)));
}
