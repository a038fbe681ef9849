//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted in the snapshot.
//! - Provide normalization helpers shared by store writes and snapshot reads.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `title` is trimmed and non-empty after every successful mutation.
//! - `updated_at` is never earlier than `created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a todo record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Validation error for todo record state and caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// `updated_at` precedes `created_at`.
    UpdatedBeforeCreated,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty after trimming"),
            Self::UpdatedBeforeCreated => {
                write!(f, "updated_at must not be earlier than created_at")
            }
        }
    }
}

impl Error for TodoValidationError {}

/// Canonical task record.
///
/// Wire names stay camelCase so snapshots written by earlier versions of the
/// application remain loadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Stable global ID assigned at creation.
    pub id: TodoId,
    /// Trimmed, non-empty task text.
    pub title: String,
    /// Optional detail text; `None` means "no description".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag, `false` at creation.
    pub completed: bool,
    /// Fixed at creation, never changed afterwards.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation of this record.
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Creates a new record with a generated stable ID.
    ///
    /// # Contract
    /// - `title` is trimmed; an empty result is rejected.
    /// - `description` is trimmed; an empty result becomes `None`.
    /// - `created_at == updated_at` on the returned record.
    pub fn new(title: &str, description: Option<&str>) -> Result<Self, TodoValidationError> {
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: normalize_title(title)?,
            description: normalize_description(description),
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        if self.updated_at < self.created_at {
            return Err(TodoValidationError::UpdatedBeforeCreated);
        }
        Ok(())
    }

    /// Returns whether this record still needs doing.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Partial update for a todo record; absent fields are left unchanged.
///
/// A present `description` is re-normalized, so a blank value clears the
/// stored description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Trims a title and rejects empty results.
pub fn normalize_title(raw: &str) -> Result<String, TodoValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TodoValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Trims a description; an empty result is treated as absent.
pub fn normalize_description(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
