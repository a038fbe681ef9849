//! SQLite-backed persistence slot.
//!
//! # Responsibility
//! - Store slot values in the `slots` key-value table.
//! - Refuse to operate on connections without applied migrations.
//!
//! # Invariants
//! - `set` is a single upsert; readers never observe a half-written value.

use super::{PersistenceSlot, SlotError, SlotResult};
use crate::db::migrations::latest_version;
use rusqlite::{params, Connection};

/// Slot over a bootstrapped SQLite connection.
pub struct SqliteSlot<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlot<'conn> {
    /// Wraps a connection after checking its schema version.
    ///
    /// # Errors
    /// - `SlotError::UninitializedConnection` when migrations have not run.
    pub fn try_new(conn: &'conn Connection) -> SlotResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version < expected_version {
            return Err(SlotError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl PersistenceSlot for SqliteSlot<'_> {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM slots WHERE key = ?1;")?;
        let mut rows = stmt.query(params![key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn set(&self, key: &str, value: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}
