//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and its serialized shape.
//! - Normalize and validate raw user input before it reaches the store.
//!
//! # Invariants
//! - `id` and `created_at` are assigned once and never change.
//! - `title` and `content` are non-empty after trimming.
//! - `tag` is trimmed but may be empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque note identifier.
///
/// Kept as a plain string so ids written by other producers load unchanged.
pub type NoteId = String;

/// One user-authored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Optional label. Empty string means "no tag".
    #[serde(default)]
    pub tag: String,
    /// Plain text body. Newlines are significant for display.
    pub content: String,
    /// Serialized as `createdAt` to match the persisted JSON schema.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Builds a note with caller-provided identity and timestamp.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(id: impl Into<NoteId>, draft: ValidDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            tag: draft.tag,
            content: draft.content,
            created_at,
        }
    }

    /// Replaces the mutable fields, leaving `id` and `created_at` untouched.
    pub fn apply(&mut self, draft: ValidDraft) {
        self.title = draft.title;
        self.tag = draft.tag;
        self.content = draft.content;
    }

    /// Returns whether the note has a non-empty tag.
    pub fn has_tag(&self) -> bool {
        !self.tag.is_empty()
    }
}

/// Generates a new random note id.
pub fn new_note_id() -> NoteId {
    Uuid::new_v4().to_string()
}

/// Raw user input for create and edit flows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub tag: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        tag: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tag: tag.into(),
            content: content.into(),
        }
    }

    /// Trims every field and checks required ones.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed title is empty (checked first).
    /// - `EmptyContent` when the trimmed content is empty.
    pub fn validate(&self) -> Result<ValidDraft, NoteValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        let content = self.content.trim();
        if content.is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }

        Ok(ValidDraft {
            title: title.to_string(),
            tag: self.tag.trim().to_string(),
            content: content.to_string(),
        })
    }
}

/// Normalized draft that passed validation.
///
/// Only constructible through [`NoteDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    title: String,
    tag: String,
    content: String,
}

impl ValidDraft {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Input validation failures for create and edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyTitle,
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyContent => write!(f, "content must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}
