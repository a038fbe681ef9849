//! Persistence slot abstraction and built-in backends.
//!
//! # Responsibility
//! - Define the key-value contract the store persists snapshots through.
//! - Isolate SQLite details from store/business orchestration.
//!
//! # Invariants
//! - `set` replaces the full value under the key; there is no partial write.
//! - Backends surface transport failures as `SlotError`, never panics.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemorySlot;
pub use sqlite::SqliteSlot;

pub type SlotResult<T> = Result<T, SlotError>;

/// Transport error for persistence slot backends.
#[derive(Debug)]
pub enum SlotError {
    Sqlite(rusqlite::Error),
    /// Connection has not had schema migrations applied.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Backend is unable to serve reads or writes right now.
    Unavailable(String),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}; run migrations first"
            ),
            Self::Unavailable(message) => write!(f, "persistence slot unavailable: {message}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::Unavailable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Synchronous key-value interface the store persists through.
///
/// The host environment supplies the real backend; `MemorySlot` covers tests
/// and `SqliteSlot` is the default local backend.
pub trait PersistenceSlot {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> SlotResult<Option<String>>;

    /// Overwrites the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> SlotResult<()>;
}
