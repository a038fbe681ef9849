//! Todo collection manager.
//!
//! # Responsibility
//! - Maintain the authoritative in-memory collection in insertion order.
//! - Mirror the full collection into the persistence slot after every change.
//!
//! # Invariants
//! - No slot write happens before `initialize` completes; this protects a
//!   not-yet-loaded snapshot from being overwritten with an empty collection.
//! - A failed slot write never rolls back the in-memory mutation; the
//!   in-memory state stays the user-visible source of truth for the session.
//! - No two records in the collection share an id.

use crate::model::todo::{normalize_description, normalize_title, Todo, TodoId, TodoPatch, TodoValidationError};
use crate::slot::{PersistenceSlot, SlotError};
use crate::store::snapshot;
use chrono::Utc;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot key the whole collection is persisted under.
pub const SLOT_KEY: &str = "todos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for collection operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(TodoValidationError),
    Slot(SlotError),
    NotFound(TodoId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Slot(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Slot(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Slot(value)
    }
}

/// Manager for the ordered todo collection and its persisted mirror.
///
/// Lifecycle: construct with a slot backend, `initialize`, then operate.
/// Dropping the store releases the collection; its last state survives only
/// in the slot.
pub struct TodoStore<S: PersistenceSlot> {
    slot: S,
    todos: Vec<Todo>,
    ready: bool,
}

impl<S: PersistenceSlot> TodoStore<S> {
    /// Creates a store that has not loaded its snapshot yet.
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            todos: Vec::new(),
            ready: false,
        }
    }

    /// Loads the persisted snapshot and marks the store ready.
    ///
    /// An absent slot value yields an empty collection. A malformed snapshot
    /// is reported and discarded as a whole; the store still becomes ready
    /// with an empty collection.
    ///
    /// # Errors
    /// - `StoreError::Slot` when the slot read itself fails.
    pub fn initialize(&mut self) -> StoreResult<()> {
        let loaded = match self.slot.get(SLOT_KEY)? {
            None => Vec::new(),
            Some(raw) => match snapshot::decode(&raw) {
                Ok(todos) => todos,
                Err(err) => {
                    error!("event=snapshot_decode module=store status=error error={err}");
                    Vec::new()
                }
            },
        };

        info!(
            "event=store_init module=store status=ok count={}",
            loaded.len()
        );
        self.todos = loaded;
        self.ready = true;
        Ok(())
    }

    /// Appends a new record and persists the collection.
    ///
    /// # Contract
    /// - `title` is trimmed; an empty result is rejected before any change.
    /// - The new record starts with `completed = false` and equal
    ///   creation/update stamps.
    pub fn create(&mut self, title: &str, description: Option<&str>) -> StoreResult<Todo> {
        let todo = Todo::new(title, description)?;
        self.todos.push(todo.clone());
        self.persist();
        Ok(todo)
    }

    /// Applies a partial update to the record with `id`.
    ///
    /// The patch is validated before any field is written, so a rejected
    /// patch leaves the record untouched. Returns the post-update record.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no record has `id`.
    /// - `StoreError::Validation` when the patch title is blank.
    pub fn update(&mut self, id: TodoId, patch: &TodoPatch) -> StoreResult<Todo> {
        let position = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let title = match patch.title.as_deref() {
            Some(raw) => Some(normalize_title(raw)?),
            None => None,
        };

        let todo = &mut self.todos[position];
        if let Some(title) = title {
            todo.title = title;
        }
        if let Some(raw) = patch.description.as_deref() {
            todo.description = normalize_description(Some(raw));
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        todo.updated_at = Utc::now();

        let updated = todo.clone();
        self.persist();
        Ok(updated)
    }

    /// Flips the completion flag of the record with `id`.
    pub fn toggle(&mut self, id: TodoId) -> StoreResult<Todo> {
        let completed = self
            .get_by_id(id)
            .map(|todo| todo.completed)
            .ok_or(StoreError::NotFound(id))?;
        self.update(
            id,
            &TodoPatch {
                completed: Some(!completed),
                ..TodoPatch::default()
            },
        )
    }

    /// Removes the record with `id`; returns whether anything was removed.
    ///
    /// The slot write is skipped when the collection did not change.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let len_before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        let removed = self.todos.len() != len_before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Removes every completed record, preserving the order of the rest.
    pub fn clear_completed(&mut self) {
        let len_before = self.todos.len();
        self.todos.retain(Todo::is_active);
        let removed = len_before - self.todos.len();
        if removed > 0 {
            info!("event=clear_completed module=store status=ok removed={removed}");
            self.persist();
        }
    }

    /// Pure lookup by id; no persistence side effects.
    pub fn get_by_id(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Current collection in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Whether `initialize` has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Host access to the underlying slot backend.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    fn persist(&self) {
        if !self.ready {
            debug!("event=snapshot_write module=store status=skipped reason=not_ready");
            return;
        }

        let encoded = match snapshot::encode(&self.todos) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!("event=snapshot_write module=store status=error stage=encode error={err}");
                return;
            }
        };

        if let Err(err) = self.slot.set(SLOT_KEY, &encoded) {
            warn!("event=snapshot_write module=store status=error stage=set error={err}");
        }
    }
}
