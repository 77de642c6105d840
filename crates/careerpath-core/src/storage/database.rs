//! SQLite-backed key-value storage.
//!
//! The assessment core performs no I/O of its own. Hosts that drive a run
//! across several processes (the CLI) park the serialized controller here
//! between invocations.

use rusqlite::{params, Connection};
use std::path::Path;

use super::data_dir;
use crate::assessment::AssessmentController;
use crate::error::Result;

/// Key under which the active assessment is stored.
pub const ASSESSMENT_KEY: &str = "assessment";

/// SQLite database for application state.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/careerpath/careerpath.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        Self::open_at(&data_dir()?.join("careerpath.db"))
    }

    /// Open (or create) the database at `path`.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    ///
    /// # Errors
    /// Returns an error if SQLite cannot allocate the database.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> std::result::Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> std::result::Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> std::result::Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a key. Returns whether it existed.
    pub fn kv_delete(&self, key: &str) -> std::result::Result<bool, rusqlite::Error> {
        let removed = self
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(removed > 0)
    }

    /// Load the stored assessment, if any.
    ///
    /// A stored value that no longer deserializes is reported as an error
    /// rather than silently replaced.
    ///
    /// # Errors
    /// Returns an error on query or JSON failure.
    pub fn load_assessment(&self) -> Result<Option<AssessmentController>> {
        match self.kv_get(ASSESSMENT_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Store the assessment, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error on serialization or write failure.
    pub fn save_assessment(&self, controller: &AssessmentController) -> Result<()> {
        let json = serde_json::to_string(controller)?;
        self.kv_set(ASSESSMENT_KEY, &json)?;
        Ok(())
    }
}
