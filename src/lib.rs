//! Latvju Desinas - sausage-themed tic-tac-toe for the terminal.
//!
//! A single-player game driven by an explicit state machine over four
//! screens (title, character selection, playing, end), with a SQLite-backed
//! match-history log, in-memory session statistics, and a best-effort
//! fun-fact fetch shown when a match concludes.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with placement and terminal-state evaluation
//! - **Resolver**: one human placement, then at most one opponent reply
//! - **Flow**: pure state machine consuming validated input events
//! - **Controller**: terminal event loop mapping clicks and keys to events
//! - **Db**: append-only history log (diesel + SQLite)
//! - **Facts**: async fetch with a bounded timeout and fixed fallback

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod cli;
mod controller;
mod db;
mod facts;
mod flow;
mod resolver;
mod roster;
mod ui;

// Crate-level exports - Board model
pub use board::{Board, Cell, GRID_SIZE, Mark, PlaceError, Verdict};

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Controller
pub use controller::GameController;

// Crate-level exports - Persistence
pub use db::{DbError, HistoryLog, MatchRecord, MatchResult, NewMatchRecord};

// Crate-level exports - Fun facts
pub use facts::{DEFAULT_FACT_URL, FALLBACK_FACT, FactProvider};

// Crate-level exports - Flow machine
pub use flow::{FlowCommand, FlowState, GameFlow, InputEvent};

// Crate-level exports - Turn resolution
pub use resolver::{MatchConcluded, SessionStats, TurnOutcome, apply_player_move};

// Crate-level exports - Roster
pub use roster::{Character, CharacterSelection, ROSTER};

// Crate-level exports - Renderer view types
pub use ui::{EndView, FactStatus};
