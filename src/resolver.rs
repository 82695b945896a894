//! Turn resolution: one human placement, then at most one opponent reply.

use std::time::Duration;

use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, instrument};

use crate::board::{Board, Mark, Verdict};
use crate::db::MatchResult;

/// In-memory win/loss/draw counters for the process lifetime.
///
/// Never persisted or reset; survives restarts and returns to the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionStats {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl SessionStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter matching the given result.
    pub fn record(&mut self, result: MatchResult) {
        match result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Loss => self.losses += 1,
            MatchResult::Draw => self.draws += 1,
        }
    }
}

/// Signal emitted when a match reaches a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Getters)]
pub struct MatchConcluded {
    result: MatchResult,
    elapsed: Duration,
}

/// Result of resolving one player input on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The placement was invalid; nothing changed.
    Rejected,
    /// Both placements landed and the match continues.
    Ongoing,
    /// The match reached a terminal state.
    Concluded(MatchResult),
}

/// Applies one player placement and, if the match is still open, exactly one
/// opponent reply.
///
/// An invalid placement (occupied cell or out-of-range coordinates) is
/// rejected without touching the board. If the player's move itself ends the
/// match, the opponent never moves that turn. The opponent occupies the first
/// empty cell in row-major scan order; the scan order is a fixed part of the
/// game's behavior, not a tunable strategy.
#[instrument(skip(board))]
pub fn apply_player_move(board: &mut Board, row: usize, col: usize) -> TurnOutcome {
    if let Err(e) = board.place(row, col, Mark::Player) {
        debug!(row, col, error = %e, "Player move rejected");
        return TurnOutcome::Rejected;
    }

    match board.evaluate() {
        Verdict::Winner(mark) => return TurnOutcome::Concluded(result_for(mark)),
        Verdict::Draw => return TurnOutcome::Concluded(MatchResult::Draw),
        Verdict::Ongoing => {}
    }

    apply_opponent_move(board);

    match board.evaluate() {
        Verdict::Winner(mark) => TurnOutcome::Concluded(result_for(mark)),
        Verdict::Draw => TurnOutcome::Concluded(MatchResult::Draw),
        Verdict::Ongoing => TurnOutcome::Ongoing,
    }
}

/// Fills the first empty cell in row-major order with the opponent's mark.
///
/// A no-op on a full board; the caller only reaches this with at least one
/// empty cell since a full board evaluates to draw first.
fn apply_opponent_move(board: &mut Board) {
    if let Some((row, col)) = board.first_empty() {
        debug!(row, col, "Opponent fills first empty cell");
        // first_empty guarantees the cell is free.
        let _ = board.place(row, col, Mark::Opponent);
    }
}

/// Maps the winning mark to the result from the player's perspective.
fn result_for(mark: Mark) -> MatchResult {
    match mark {
        Mark::Player => MatchResult::Win,
        Mark::Opponent => MatchResult::Loss,
    }
}
