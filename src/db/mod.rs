//! SQLite persistence layer for the match-history log.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::DbError;
pub use models::{MatchRecord, MatchResult, NewMatchRecord};
pub use repository::HistoryLog;
