//! Database models and domain types for match history.

use chrono::Local;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::{DbError, schema};

/// Timestamp format stored in the `games` table.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recorded match, immutable once written.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::games)]
pub struct MatchRecord {
    id: i32,
    player_character: String,
    result: String,
    duration: f64,
    timestamp: String,
}

impl MatchRecord {
    /// Parses the stored result string into a [`MatchResult`] enum.
    pub fn parse_result(&self) -> Result<MatchResult, DbError> {
        MatchResult::from_db_string(self.result())
    }
}

/// Insertable model for appending a new match outcome.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::games)]
pub struct NewMatchRecord {
    player_character: String,
    result: String,
    duration: f64,
    timestamp: String,
}

impl NewMatchRecord {
    /// Builds a record for a just-concluded match, stamping the current
    /// local time in `"YYYY-MM-DD HH:MM:SS"` format.
    pub fn from_outcome(character_id: &str, result: MatchResult, duration_secs: f64) -> Self {
        Self::new(
            character_id.to_string(),
            result.to_db_string().to_string(),
            duration_secs,
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
        )
    }
}

/// Match outcome from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// Player won the match.
    Win,
    /// Player lost the match.
    Loss,
    /// Match ended in a draw.
    Draw,
}

impl MatchResult {
    /// Converts the result to the string stored in the database.
    pub fn to_db_string(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Draw => "draw",
        }
    }

    /// Parses the result from the string stored in the database.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the string is not a valid result value.
    pub fn from_db_string(s: &str) -> Result<Self, DbError> {
        match s {
            "win" => Ok(Self::Win),
            "loss" => Ok(Self::Loss),
            "draw" => Ok(Self::Draw),
            _ => Err(DbError::new(format!("Invalid result: '{}'", s))),
        }
    }
}
