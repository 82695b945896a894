//! Terminal event loop driving the game flow machine.
//!
//! Maps raw crossterm key and mouse events to validated [`InputEvent`]s via
//! the shared screen geometry, applies at most one transition per event, and
//! performs the side effects the machine requests (history append, fun-fact
//! fetch).

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::Backend, layout::Rect};
use tokio::sync::oneshot;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

use crate::board::GRID_SIZE;
use crate::db::{HistoryLog, MatchRecord, NewMatchRecord};
use crate::facts::{FALLBACK_FACT, FactProvider};
use crate::flow::{FlowCommand, FlowState, GameFlow, InputEvent};
use crate::resolver::MatchConcluded;
use crate::ui::{self, EndView, FactStatus, layout};

/// Number of history rows shown on the end screen.
const HISTORY_LIMIT: i64 = 5;

/// Controller that owns the flow machine and its collaborators.
///
/// Call [`GameController::run`] to start the event loop.
#[derive(Debug)]
pub struct GameController {
    flow: GameFlow,
    history: HistoryLog,
    facts: FactProvider,
    recent: Vec<MatchRecord>,
    fact: FactStatus,
    pending_fact: Option<oneshot::Receiver<String>>,
    last_area: Rect,
}

impl GameController {
    /// Creates a controller on the title screen.
    #[instrument(skip(history, facts))]
    pub fn new(history: HistoryLog, facts: FactProvider) -> Self {
        info!("Creating GameController");
        Self {
            flow: GameFlow::new(),
            history,
            facts,
            recent: Vec::new(),
            fact: FactStatus::Idle,
            pending_fact: None,
            last_area: Rect::default(),
        }
    }

    /// Runs the event loop until the player quits.
    ///
    /// One transition per input event; rendering happens synchronously after
    /// every poll cycle. The fun-fact fetch runs as a background task and is
    /// polled here, so the loop never blocks on the network.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        info!("Starting game event loop");

        loop {
            self.poll_fact();

            let mut area = Rect::default();
            terminal.draw(|f| {
                area = f.area();
                ui::draw(
                    f,
                    &self.flow,
                    EndView {
                        recent: &self.recent,
                        fact: &self.fact,
                    },
                )
            })?;
            self.last_area = area;

            // Short poll timeout keeps the loop responsive while the fact
            // fetch resolves in the background.
            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => {
                        // Skip key release events (crossterm fires both).
                        if key.kind == KeyEventKind::Release {
                            continue;
                        }
                        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                            info!("Quit requested");
                            return Ok(());
                        }
                        if let Some(input) = self.map_key(key) {
                            self.dispatch(input);
                        }
                    }
                    Event::Mouse(mouse) => {
                        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                            // Hit-test against the geometry of the last draw.
                            if let Some(input) = self.map_click(mouse, self.last_area) {
                                self.dispatch(input);
                            } else {
                                debug!(
                                    x = mouse.column,
                                    y = mouse.row,
                                    "Click outside recognized regions"
                                );
                            }
                        }
                    }
                    _ => {}
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies one input event and performs any requested side effect.
    #[instrument(skip(self))]
    fn dispatch(&mut self, input: InputEvent) {
        if let Some(FlowCommand::RecordMatch(concluded)) = self.flow.handle(input) {
            self.on_match_concluded(concluded);
        }

        // Leaving the end screen drops interest in any in-flight fetch.
        if *self.flow.state() != FlowState::End && self.fact != FactStatus::Idle {
            self.fact = FactStatus::Idle;
            self.pending_fact = None;
        }
    }

    /// Records a concluded match and starts the fun-fact fetch.
    ///
    /// Persistence failures are logged and swallowed; gameplay continues
    /// uninterrupted with whatever history is available.
    #[instrument(skip(self))]
    fn on_match_concluded(&mut self, concluded: MatchConcluded) {
        let character = self.flow.selection().selected();
        let record = NewMatchRecord::from_outcome(
            character.id,
            *concluded.result(),
            concluded.elapsed().as_secs_f64(),
        );
        if let Err(e) = self.history.append(record) {
            warn!(error = %e, "Failed to record match outcome");
        }

        self.recent = match self.history.recent(HISTORY_LIMIT) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Failed to load match history");
                Vec::new()
            }
        };

        self.fact = FactStatus::Pending;
        self.pending_fact = Some(self.facts.spawn_fetch());
    }

    /// Polls the in-flight fact fetch without blocking.
    fn poll_fact(&mut self) {
        if let Some(rx) = &mut self.pending_fact {
            match rx.try_recv() {
                Ok(fact) => {
                    debug!("Fun fact resolved");
                    self.fact = FactStatus::Ready(fact);
                    self.pending_fact = None;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    warn!("Fun fact task dropped its channel");
                    self.fact = FactStatus::Ready(FALLBACK_FACT.to_string());
                    self.pending_fact = None;
                }
            }
        }
    }

    /// Maps a key press to an input event for the current state.
    fn map_key(&self, key: KeyEvent) -> Option<InputEvent> {
        match (self.flow.state(), key.code) {
            (FlowState::Start, KeyCode::Enter) => Some(InputEvent::StartPressed),
            (FlowState::CharacterSelect, KeyCode::Left) => Some(InputEvent::PrevCharacter),
            (FlowState::CharacterSelect, KeyCode::Right) => Some(InputEvent::NextCharacter),
            (FlowState::CharacterSelect, KeyCode::Enter) => Some(InputEvent::ConfirmCharacter),
            (FlowState::Playing, KeyCode::Char(c)) if c.is_ascii_digit() && c != '0' => {
                let idx = c as usize - '1' as usize;
                Some(InputEvent::CellPressed {
                    row: idx / GRID_SIZE,
                    col: idx % GRID_SIZE,
                })
            }
            (FlowState::End, KeyCode::Enter | KeyCode::Char('r')) => {
                Some(InputEvent::RestartPressed)
            }
            (FlowState::End, KeyCode::Char('m') | KeyCode::Esc) => Some(InputEvent::MenuPressed),
            _ => None,
        }
    }

    /// Maps a left click to an input event using the current screen geometry.
    fn map_click(&self, mouse: MouseEvent, area: Rect) -> Option<InputEvent> {
        let (x, y) = (mouse.column, mouse.row);
        match self.flow.state() {
            FlowState::Start => {
                let l = layout::start_layout(area);
                layout::hit(l.start_button, x, y).then_some(InputEvent::StartPressed)
            }
            FlowState::CharacterSelect => {
                let l = layout::select_layout(area);
                if layout::hit(l.prev_button, x, y) {
                    Some(InputEvent::PrevCharacter)
                } else if layout::hit(l.next_button, x, y) {
                    Some(InputEvent::NextCharacter)
                } else if layout::hit(l.confirm_button, x, y) {
                    Some(InputEvent::ConfirmCharacter)
                } else {
                    None
                }
            }
            FlowState::Playing => {
                let l = layout::playing_layout(area);
                layout::cell_at(l.grid, x, y).map(|(row, col)| InputEvent::CellPressed { row, col })
            }
            FlowState::End => {
                let l = layout::end_layout(area);
                if layout::hit(l.restart_button, x, y) {
                    Some(InputEvent::RestartPressed)
                } else if layout::hit(l.menu_button, x, y) {
                    Some(InputEvent::MenuPressed)
                } else {
                    None
                }
            }
        }
    }
}
