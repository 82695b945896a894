//! Fixed roster of selectable sausage characters.

use derive_getters::Getters;

/// A selectable character: a stable id (stored in match history) and a
/// display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    /// Identifier recorded in the history log.
    pub id: &'static str,
    /// Name shown in the UI.
    pub name: &'static str,
}

/// The fixed ordered roster of 9 selectable characters.
pub const ROSTER: [Character; 9] = [
    Character { id: "sausage0", name: "Frankfurter" },
    Character { id: "sausage1", name: "Bratwurst" },
    Character { id: "sausage2", name: "Kielbasa" },
    Character { id: "sausage3", name: "Chorizo" },
    Character { id: "sausage4", name: "Cumberland" },
    Character { id: "sausage5", name: "Andouille" },
    Character { id: "sausage6", name: "Merguez" },
    Character { id: "sausage7", name: "Boerewors" },
    Character { id: "sausage8", name: "Salami" },
];

/// Offset from the player's roster index to the opponent's display character.
const OPPONENT_OFFSET: usize = 4;

/// Cursor into the roster, wrapping modulo the roster size.
///
/// Mutated only while on the character-selection screen; the selection is
/// retained across restarts within a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct CharacterSelection {
    index: usize,
}

impl CharacterSelection {
    /// Creates a selection pointing at the first roster entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the selection one entry back, wrapping at the start.
    pub fn prev(&mut self) {
        self.index = (self.index + ROSTER.len() - 1) % ROSTER.len();
    }

    /// Moves the selection one entry forward, wrapping at the end.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % ROSTER.len();
    }

    /// Returns the currently selected character.
    pub fn selected(&self) -> &'static Character {
        &ROSTER[self.index]
    }

    /// Returns the opponent's display character, four entries past the
    /// player's selection.
    pub fn opponent(&self) -> &'static Character {
        &ROSTER[(self.index + OPPONENT_OFFSET) % ROSTER.len()]
    }
}
