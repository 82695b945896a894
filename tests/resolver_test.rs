//! Tests for turn resolution: player placement plus the opponent's
//! first-empty-cell reply.

use desinas::{Board, Cell, Mark, MatchResult, TurnOutcome, apply_player_move};

#[test]
fn test_opponent_fills_first_empty_cell() {
    let mut board = Board::new();
    // Player takes (0, 0); the opponent must take the lowest row-major
    // empty index, which is now (0, 1).
    let outcome = apply_player_move(&mut board, 0, 0);
    assert_eq!(outcome, TurnOutcome::Ongoing);
    assert_eq!(board.cell(0, 0), Some(Cell::Occupied(Mark::Player)));
    assert_eq!(board.cell(0, 1), Some(Cell::Occupied(Mark::Opponent)));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_winning_move_skips_opponent_reply() {
    let mut board = Board::new();
    // X on (1, 1) -> O on (0, 0); X on (1, 0) -> O on (0, 1).
    assert_eq!(apply_player_move(&mut board, 1, 1), TurnOutcome::Ongoing);
    assert_eq!(apply_player_move(&mut board, 1, 0), TurnOutcome::Ongoing);
    let before = board.occupied_count();

    // (1, 2) completes the middle row; the opponent never moves.
    let outcome = apply_player_move(&mut board, 1, 2);
    assert_eq!(outcome, TurnOutcome::Concluded(MatchResult::Win));
    assert_eq!(board.occupied_count(), before + 1);
}

#[test]
fn test_rejected_move_changes_nothing() {
    let mut board = Board::new();
    assert_eq!(apply_player_move(&mut board, 0, 0), TurnOutcome::Ongoing);
    let snapshot = board.clone();

    // (0, 1) is now held by the opponent.
    assert_eq!(apply_player_move(&mut board, 0, 1), TurnOutcome::Rejected);
    assert_eq!(board, snapshot);

    assert_eq!(apply_player_move(&mut board, 5, 5), TurnOutcome::Rejected);
    assert_eq!(board, snapshot);
}

#[test]
fn test_opponent_row_completes_as_loss() {
    let mut board = Board::new();
    // O takes (0,0), (0,1), then (0,2) for the top row while the player
    // stays away from it.
    assert_eq!(apply_player_move(&mut board, 1, 1), TurnOutcome::Ongoing);
    assert_eq!(apply_player_move(&mut board, 2, 2), TurnOutcome::Ongoing);
    let outcome = apply_player_move(&mut board, 1, 0);
    assert_eq!(outcome, TurnOutcome::Concluded(MatchResult::Loss));
}

#[test]
fn test_full_board_resolves_as_draw() {
    let mut board = Board::new();
    // Final position: O X O / O X X / X O X - no winning line.
    assert_eq!(apply_player_move(&mut board, 1, 1), TurnOutcome::Ongoing);
    assert_eq!(apply_player_move(&mut board, 0, 1), TurnOutcome::Ongoing);
    assert_eq!(apply_player_move(&mut board, 2, 0), TurnOutcome::Ongoing);
    assert_eq!(apply_player_move(&mut board, 1, 2), TurnOutcome::Ongoing);
    let outcome = apply_player_move(&mut board, 2, 2);
    assert_eq!(outcome, TurnOutcome::Concluded(MatchResult::Draw));
    assert_eq!(board.occupied_count(), 9);
}
