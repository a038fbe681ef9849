//! Read-side list shaping for presentation layers.
//!
//! # Responsibility
//! - Filter and sort the rendered list without touching stored state.
//! - Derive the count badges shown next to the filter toggles.
//!
//! # Invariants
//! - Nothing here mutates the collection or triggers persistence.

use crate::model::todo::Todo;
use std::str::FromStr;

/// Which records the rendered list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(format!(
                "unsupported filter `{other}`; expected all|active|completed"
            )),
        }
    }
}

/// Sort order of the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first.
    #[default]
    CreatedAt,
    /// Case-insensitive title, ascending.
    Title,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::CreatedAt),
            "title" => Ok(Self::Title),
            other => Err(format!("unsupported sort key `{other}`; expected date|title")),
        }
    }
}

/// Count badges for the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Returns references to the records visible under `filter`, ordered by
/// `sort`. The underlying collection is left untouched.
pub fn visible<'a>(todos: &'a [Todo], filter: Filter, sort: SortKey) -> Vec<&'a Todo> {
    let mut items: Vec<&Todo> = todos
        .iter()
        .filter(|todo| match filter {
            Filter::All => true,
            Filter::Active => todo.is_active(),
            Filter::Completed => todo.completed,
        })
        .collect();

    match sort {
        SortKey::CreatedAt => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Title => {
            items.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }

    items
}

/// Tallies the collection for the filter-bar badges.
pub fn counts(todos: &[Todo]) -> ListCounts {
    let active = todos.iter().filter(|todo| todo.is_active()).count();
    ListCounts {
        total: todos.len(),
        active,
        completed: todos.len() - active,
    }
}
