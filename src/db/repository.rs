//! Append-only repository for the match-history log.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::{DbError, MatchRecord, NewMatchRecord, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite-backed history log for match outcomes.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    db_path: String,
}

impl HistoryLog {
    /// Creates a history log backed by the database at the given path,
    /// applying any pending schema migrations.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, DbError> {
        info!(path = %db_path, "Opening history log");
        let log = Self { db_path };
        let mut conn = log.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migration error: {}", e)))?;
        Ok(log)
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Appends a match outcome to the log.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, record), fields(character = %record.player_character(), result = %record.result()))]
    pub fn append(&self, record: NewMatchRecord) -> Result<MatchRecord, DbError> {
        debug!("Appending match outcome");
        let mut conn = self.connection()?;

        let recorded = diesel::insert_into(schema::games::table)
            .values(&record)
            .returning(MatchRecord::as_returning())
            .get_result(&mut conn)?;

        info!(
            record_id = recorded.id(),
            result = %recorded.result(),
            "Match outcome recorded"
        );
        Ok(recorded)
    }

    /// Returns the most recent match records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn recent(&self, limit: i64) -> Result<Vec<MatchRecord>, DbError> {
        debug!(limit, "Loading recent match history");
        let mut conn = self.connection()?;

        // Insertion id breaks ties between matches recorded in the same second.
        let records = schema::games::table
            .order(schema::games::timestamp.desc())
            .then_order_by(schema::games::id.desc())
            .limit(limit)
            .load::<MatchRecord>(&mut conn)?;

        info!(count = records.len(), "Match history loaded");
        Ok(records)
    }
}
