//! Snapshot codec for the persisted todo collection.
//!
//! # Responsibility
//! - Encode the full collection to the JSON snapshot format.
//! - Decode persisted snapshots, rejecting invalid state instead of masking it.
//!
//! # Invariants
//! - Timestamps travel as ISO-8601 strings (`createdAt`/`updatedAt`).
//! - A snapshot with any malformed record is rejected as a whole; there is no
//!   partial recovery of decodable entries.

use crate::model::todo::{normalize_description, Todo, TodoId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Decode/encode error for persisted snapshots.
#[derive(Debug)]
pub enum SnapshotError {
    Json(serde_json::Error),
    InvalidRecord { id: TodoId, message: String },
    DuplicateId(TodoId),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "{err}"),
            Self::InvalidRecord { id, message } => {
                write!(f, "invalid persisted record {id}: {message}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate id {id} in persisted snapshot"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidRecord { .. } => None,
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes the entire collection as one JSON array.
pub fn encode(todos: &[Todo]) -> SnapshotResult<String> {
    Ok(serde_json::to_string(todos)?)
}

/// Parses a snapshot back into a collection.
///
/// Titles and descriptions are re-normalized so a foreign snapshot cannot
/// introduce padding or blank-but-present descriptions.
pub fn decode(raw: &str) -> SnapshotResult<Vec<Todo>> {
    let mut todos: Vec<Todo> = serde_json::from_str(raw)?;
    let mut seen_ids: HashSet<TodoId> = HashSet::with_capacity(todos.len());

    for todo in &mut todos {
        todo.title = todo.title.trim().to_string();
        todo.description = normalize_description(todo.description.as_deref());
        todo.validate().map_err(|err| SnapshotError::InvalidRecord {
            id: todo.id,
            message: err.to_string(),
        })?;
        if !seen_ids.insert(todo.id) {
            return Err(SnapshotError::DuplicateId(todo.id));
        }
    }

    Ok(todos)
}
