//! Filtered and sorted note views.
//!
//! # Responsibility
//! - Case-insensitive substring search over title, content and tag.
//! - Stable ordering by creation time in either direction.
//!
//! # Invariants
//! - Queries never mutate or reorder the source collection.
//! - Notes with equal `created_at` keep their source order.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Display order keyed on `created_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewestFirst => "newest-first",
            Self::OldestFirst => "oldest-first",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when text names neither sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortOrderError(String);

impl Display for ParseSortOrderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown sort order `{}`; expected newest-first|oldest-first",
            self.0
        )
    }
}

impl Error for ParseSortOrderError {}

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest-first" | "newest" => Ok(Self::NewestFirst),
            "oldest-first" | "oldest" => Ok(Self::OldestFirst),
            _ => Err(ParseSortOrderError(value.to_string())),
        }
    }
}

/// View request issued by presentation code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    /// Raw search text; trimmed and lowercased before matching.
    pub text: String,
    pub sort: SortOrder,
}

impl NoteQuery {
    pub fn new(text: impl Into<String>, sort: SortOrder) -> Self {
        Self {
            text: text.into(),
            sort,
        }
    }

    /// Returns the matching notes in display order.
    pub fn run<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        let needle = normalize_search_text(&self.text);
        let mut view: Vec<&Note> = match needle.as_deref() {
            Some(needle) => notes
                .iter()
                .filter(|note| note_matches(note, needle))
                .collect(),
            None => notes.iter().collect(),
        };

        // `sort_by` is stable, which keeps source order for equal timestamps.
        match self.sort {
            SortOrder::NewestFirst => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::OldestFirst => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
        view
    }
}

/// Trims and lowercases search text; `None` means "no filter".
pub fn normalize_search_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// `needle` must already be normalized.
pub fn note_matches(note: &Note, needle: &str) -> bool {
    [&note.title, &note.content, &note.tag]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
