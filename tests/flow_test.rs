//! Tests for the game flow state machine.

use desinas::{
    Board, FlowCommand, FlowState, GameFlow, InputEvent, MatchResult, ROSTER,
};

/// Drives a fresh machine into the playing state with the default character.
fn start_playing() -> GameFlow {
    let mut flow = GameFlow::new();
    assert!(flow.handle(InputEvent::StartPressed).is_none());
    assert!(flow.handle(InputEvent::ConfirmCharacter).is_none());
    assert_eq!(*flow.state(), FlowState::Playing);
    flow
}

/// Plays the middle row to a win: the opponent replies fill (0,0) and (0,1).
fn play_to_win(flow: &mut GameFlow) -> FlowCommand {
    assert!(flow.handle(InputEvent::CellPressed { row: 1, col: 1 }).is_none());
    assert!(flow.handle(InputEvent::CellPressed { row: 1, col: 0 }).is_none());
    flow.handle(InputEvent::CellPressed { row: 1, col: 2 })
        .expect("Winning move should emit a command")
}

#[test]
fn test_initial_state_is_start() {
    let flow = GameFlow::new();
    assert_eq!(*flow.state(), FlowState::Start);
    assert_eq!(*flow.stats().wins(), 0);
    assert_eq!(*flow.stats().losses(), 0);
    assert_eq!(*flow.stats().draws(), 0);
}

#[test]
fn test_start_button_enters_character_select() {
    let mut flow = GameFlow::new();
    assert!(flow.handle(InputEvent::StartPressed).is_none());
    assert_eq!(*flow.state(), FlowState::CharacterSelect);
}

#[test]
fn test_character_selection_wraps() {
    let mut flow = GameFlow::new();
    flow.handle(InputEvent::StartPressed);

    // At index 0, prev wraps to the last roster entry.
    flow.handle(InputEvent::PrevCharacter);
    assert_eq!(*flow.selection().index(), ROSTER.len() - 1);

    // At the last entry, next wraps back to 0.
    flow.handle(InputEvent::NextCharacter);
    assert_eq!(*flow.selection().index(), 0);
}

#[test]
fn test_full_winning_scenario() {
    let mut flow = GameFlow::new();
    flow.handle(InputEvent::StartPressed);
    flow.handle(InputEvent::NextCharacter);
    flow.handle(InputEvent::NextCharacter);
    flow.handle(InputEvent::ConfirmCharacter);
    assert_eq!(*flow.state(), FlowState::Playing);
    assert_eq!(*flow.selection().index(), 2);

    let command = play_to_win(&mut flow);
    let FlowCommand::RecordMatch(concluded) = command;
    assert_eq!(*concluded.result(), MatchResult::Win);
    assert_eq!(*flow.state(), FlowState::End);
    assert_eq!(*flow.stats().wins(), 1);
    assert_eq!(*flow.last_result(), Some(MatchResult::Win));
}

#[test]
fn test_restart_keeps_character_and_stats() {
    let mut flow = GameFlow::new();
    flow.handle(InputEvent::StartPressed);
    flow.handle(InputEvent::NextCharacter);
    flow.handle(InputEvent::ConfirmCharacter);
    play_to_win(&mut flow);
    assert_eq!(*flow.state(), FlowState::End);

    flow.handle(InputEvent::RestartPressed);
    assert_eq!(*flow.state(), FlowState::Playing);
    assert_eq!(*flow.board(), Board::new());
    assert_eq!(*flow.selection().index(), 1);
    assert_eq!(*flow.stats().wins(), 1);
    assert_eq!(*flow.last_result(), None);
}

#[test]
fn test_menu_returns_to_start_without_resetting_stats() {
    let mut flow = start_playing();
    play_to_win(&mut flow);

    flow.handle(InputEvent::MenuPressed);
    assert_eq!(*flow.state(), FlowState::Start);
    assert_eq!(*flow.board(), Board::new());
    // Stats persist for the process lifetime, even through the menu.
    assert_eq!(*flow.stats().wins(), 1);
}

#[test]
fn test_invalid_move_is_a_no_op() {
    let mut flow = start_playing();
    flow.handle(InputEvent::CellPressed { row: 0, col: 0 });
    let board = flow.board().clone();
    let stats = *flow.stats();

    // (0, 1) was just taken by the opponent.
    let command = flow.handle(InputEvent::CellPressed { row: 0, col: 1 });
    assert!(command.is_none());
    assert_eq!(*flow.board(), board);
    assert_eq!(*flow.stats(), stats);
    assert_eq!(*flow.state(), FlowState::Playing);
}

#[test]
fn test_undefined_transitions_are_no_ops() {
    let mut flow = GameFlow::new();
    for event in [
        InputEvent::PrevCharacter,
        InputEvent::ConfirmCharacter,
        InputEvent::CellPressed { row: 0, col: 0 },
        InputEvent::RestartPressed,
        InputEvent::MenuPressed,
    ] {
        assert!(flow.handle(event).is_none());
        assert_eq!(*flow.state(), FlowState::Start);
    }

    flow.handle(InputEvent::StartPressed);
    assert!(flow.handle(InputEvent::StartPressed).is_none());
    assert_eq!(*flow.state(), FlowState::CharacterSelect);
    assert!(
        flow.handle(InputEvent::CellPressed { row: 1, col: 1 })
            .is_none()
    );
    assert_eq!(*flow.state(), FlowState::CharacterSelect);
    assert_eq!(*flow.board(), Board::new());
}

#[test]
fn test_stats_accumulate_across_matches() {
    let mut flow = start_playing();
    play_to_win(&mut flow);
    flow.handle(InputEvent::RestartPressed);
    play_to_win(&mut flow);
    assert_eq!(*flow.stats().wins(), 2);
    assert_eq!(*flow.stats().losses(), 0);
    assert_eq!(*flow.stats().draws(), 0);
}
