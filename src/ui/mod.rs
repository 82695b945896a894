//! Terminal renderer: one-way data flow from game state to the screen.
//!
//! Each screen module draws from shared geometry in [`layout`], so mouse
//! hit-testing in the controller always matches what was rendered.

mod character_select;
mod end;
pub mod layout;
mod playing;
mod start;

use ratatui::Frame;

use crate::db::MatchRecord;
use crate::flow::{FlowState, GameFlow};

/// Progress of the fun-fact fetch shown on the end screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactStatus {
    /// No fetch in flight (not on the end screen).
    Idle,
    /// Fetch spawned, result not yet available.
    Pending,
    /// Fetched text, or the fallback string on failure.
    Ready(String),
}

/// Data the end screen needs beyond the flow machine itself.
#[derive(Debug)]
pub struct EndView<'a> {
    /// Most recent match records, newest first.
    pub recent: &'a [MatchRecord],
    /// Fun-fact fetch progress.
    pub fact: &'a FactStatus,
}

/// Draws the screen for the current flow state.
pub fn draw(frame: &mut Frame, flow: &GameFlow, end_view: EndView<'_>) {
    match flow.state() {
        FlowState::Start => start::render(frame),
        FlowState::CharacterSelect => character_select::render(frame, flow.selection()),
        FlowState::Playing => playing::render(frame, flow),
        FlowState::End => end::render(frame, flow, &end_view),
    }
}
