//! Core domain logic for quicktodo.
//! This crate is the single source of truth for collection invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod slot;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{
    normalize_description, normalize_title, Todo, TodoId, TodoPatch, TodoValidationError,
};
pub use slot::{MemorySlot, PersistenceSlot, SlotError, SlotResult, SqliteSlot};
pub use store::snapshot::{SnapshotError, SnapshotResult};
pub use store::todo_store::{StoreError, StoreResult, TodoStore, SLOT_KEY};
pub use view::{counts, visible, Filter, ListCounts, SortKey};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
