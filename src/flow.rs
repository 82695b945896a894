//! Game flow state machine over {Start, CharacterSelect, Playing, End}.
//!
//! The machine is pure: it owns the board, session stats, and character
//! selection, consumes validated [`InputEvent`]s, and returns a
//! [`FlowCommand`] when the caller must perform a side effect (recording the
//! match, fetching a fact). Terminal I/O lives in the controller.

use std::time::Instant;

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::db::MatchResult;
use crate::resolver::{self, MatchConcluded, SessionStats, TurnOutcome};
use crate::roster::CharacterSelection;

/// Active screen in the game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Title screen with the start button.
    Start,
    /// Character-selection screen.
    CharacterSelect,
    /// A match in progress.
    Playing,
    /// Post-match screen with stats, history, and the fun fact.
    End,
}

/// A validated input event, already mapped from raw clicks and key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start button on the title screen.
    StartPressed,
    /// Previous-character button.
    PrevCharacter,
    /// Next-character button.
    NextCharacter,
    /// Confirm button on the character-selection screen.
    ConfirmCharacter,
    /// A grid cell on the playing screen.
    CellPressed {
        /// Grid row, 0-2 from the top.
        row: usize,
        /// Grid column, 0-2 from the left.
        col: usize,
    },
    /// Restart button on the end screen.
    RestartPressed,
    /// Menu button on the end screen.
    MenuPressed,
}

/// Side effect requested by the machine, performed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCommand {
    /// Append the concluded match to the history log and start the fun-fact
    /// fetch.
    RecordMatch(MatchConcluded),
}

/// State machine driving the whole game.
///
/// Starts in [`FlowState::Start`]; there is no terminal state — quitting is
/// an external signal handled by the event loop.
#[derive(Debug, Getters)]
pub struct GameFlow {
    state: FlowState,
    board: Board,
    stats: SessionStats,
    selection: CharacterSelection,
    #[getter(skip)]
    match_start: Option<Instant>,
    last_result: Option<MatchResult>,
}

impl GameFlow {
    /// Creates a new flow machine on the title screen.
    pub fn new() -> Self {
        Self {
            state: FlowState::Start,
            board: Board::new(),
            stats: SessionStats::new(),
            selection: CharacterSelection::new(),
            match_start: None,
            last_result: None,
        }
    }

    /// Applies one input event, returning a command when the caller must
    /// perform a side effect.
    ///
    /// Events with no transition defined for the current state are no-ops;
    /// they leave the board, stats, and state untouched and are only traced.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn handle(&mut self, event: InputEvent) -> Option<FlowCommand> {
        match (self.state, event) {
            (FlowState::Start, InputEvent::StartPressed) => {
                info!("Entering character selection");
                self.state = FlowState::CharacterSelect;
                None
            }

            (FlowState::CharacterSelect, InputEvent::PrevCharacter) => {
                self.selection.prev();
                debug!(index = self.selection.index(), "Selection moved back");
                None
            }
            (FlowState::CharacterSelect, InputEvent::NextCharacter) => {
                self.selection.next();
                debug!(index = self.selection.index(), "Selection moved forward");
                None
            }
            (FlowState::CharacterSelect, InputEvent::ConfirmCharacter) => {
                info!(character = self.selection.selected().id, "Character confirmed");
                self.begin_match();
                None
            }

            (FlowState::Playing, InputEvent::CellPressed { row, col }) => {
                self.resolve_turn(row, col)
            }

            (FlowState::End, InputEvent::RestartPressed) => {
                info!("Restarting match with the same character");
                self.begin_match();
                None
            }
            (FlowState::End, InputEvent::MenuPressed) => {
                info!("Returning to the title screen");
                self.board.reset();
                self.last_result = None;
                self.match_start = None;
                self.state = FlowState::Start;
                None
            }

            // Everything else is a no-op: unrecognized input never changes
            // state, it is only traced.
            (state, event) => {
                debug!(?state, ?event, "Ignoring input with no defined transition");
                None
            }
        }
    }

    /// Resets the board and enters the playing state with a fresh clock.
    fn begin_match(&mut self) {
        self.board.reset();
        self.last_result = None;
        self.match_start = Some(Instant::now());
        self.state = FlowState::Playing;
    }

    /// Forwards a grid press to the turn resolver and handles conclusion.
    fn resolve_turn(&mut self, row: usize, col: usize) -> Option<FlowCommand> {
        match resolver::apply_player_move(&mut self.board, row, col) {
            TurnOutcome::Rejected | TurnOutcome::Ongoing => None,
            TurnOutcome::Concluded(result) => {
                let elapsed = self
                    .match_start
                    .map(|start| start.elapsed())
                    .unwrap_or_default();
                info!(?result, elapsed_secs = elapsed.as_secs_f64(), "Match concluded");

                self.stats.record(result);
                self.last_result = Some(result);
                self.state = FlowState::End;
                Some(FlowCommand::RecordMatch(MatchConcluded::new(result, elapsed)))
            }
        }
    }
}

impl Default for GameFlow {
    fn default() -> Self {
        Self::new()
    }
}
