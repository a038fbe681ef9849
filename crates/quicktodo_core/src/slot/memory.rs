//! In-memory persistence slot.
//!
//! # Responsibility
//! - Provide a dependency-free backend for tests and ephemeral sessions.
//!
//! # Invariants
//! - Reads observe the latest completed write (single-threaded use).

use super::{PersistenceSlot, SlotResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// Map-backed slot; values live only as long as the instance.
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceSlot for MemorySlot {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SlotResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
