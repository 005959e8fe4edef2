//! Note store: the single owner of the note collection.
//!
//! # Responsibility
//! - Provide create/update/remove/clear use-cases over the in-memory collection.
//! - Persist the full collection through a `KeyValueStore` after every mutation.
//! - Serve filtered and sorted views to presentation code.
//!
//! # Invariants
//! - Memory and storage change together: the next collection is written first
//!   and only swapped in after the write succeeds.
//! - Loading never fails; unreadable storage is treated as an empty collection.
//! - New notes are prepended; display order comes from `NoteQuery`, not storage.
//! - Logs carry ids and counts only, never note text.

use crate::config::NoteStoreConfig;
use crate::model::note::{new_note_id, Note, NoteDraft, NoteId, NoteValidationError};
use crate::repo::kv_repo::{KeyValueStore, StoreError};
use crate::repo::note_codec::{decode_notes, encode_notes};
use crate::search::query::{NoteQuery, SortOrder};
use crate::service::interaction::Interaction;
use chrono::{SubsecRound, Utc};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EDIT_TITLE_LABEL: &str = "Edit title:";
const EDIT_TAG_LABEL: &str = "Edit tag (optional):";
const EDIT_CONTENT_LABEL: &str = "Edit content:";
const CLEAR_CONFIRM_MESSAGE: &str = "Delete all notes?";

/// Error for note store use-cases.
#[derive(Debug)]
pub enum NoteStoreError {
    /// Title or content is empty after trimming.
    Validation(NoteValidationError),
    /// Edit target does not exist (stale reference).
    NotFound(NoteId),
    /// Persistence backend failed; nothing was changed.
    Storage(StoreError),
    /// Collection could not be serialized; nothing was changed.
    Encode(serde_json::Error),
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Storage(err) => write!(f, "failed to persist notes: {err}"),
            Self::Encode(err) => write!(f, "failed to encode notes: {err}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteStoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for NoteStoreError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for NoteStoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Result of an interactive edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(Note),
    /// User cancelled one of the prompts; nothing changed.
    Cancelled,
}

/// Result of an interactive clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Number of notes removed.
    Cleared(usize),
    /// User declined the confirmation; nothing changed.
    Cancelled,
    /// Collection was already empty; no prompt was shown.
    AlreadyEmpty,
}

/// Reads the collection stored under `key`.
///
/// Absent keys, backend read errors, invalid JSON and non-array payloads all
/// produce an empty collection.
pub fn load_notes<S: KeyValueStore + ?Sized>(backend: &S, key: &str) -> Vec<Note> {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("event=notes_load module=store status=empty reason=absent");
            return Vec::new();
        }
        Err(err) => {
            error!("event=notes_load module=store status=recovered reason=read_failed error={err}");
            return Vec::new();
        }
    };

    match decode_notes(&raw) {
        Ok(decoded) => {
            if decoded.skipped_invalid > 0 || decoded.skipped_duplicate > 0 {
                warn!(
                    "event=notes_load module=store status=partial loaded={} skipped_invalid={} skipped_duplicate={}",
                    decoded.notes.len(),
                    decoded.skipped_invalid,
                    decoded.skipped_duplicate
                );
            } else {
                info!(
                    "event=notes_load module=store status=ok loaded={}",
                    decoded.notes.len()
                );
            }
            decoded.notes
        }
        Err(corrupt) => {
            warn!("event=notes_load module=store status=recovered reason=corrupt detail={corrupt}");
            Vec::new()
        }
    }
}

/// Serializes `notes` and writes them under `key`, replacing any prior value.
pub fn save_notes<S: KeyValueStore + ?Sized>(
    backend: &mut S,
    key: &str,
    notes: &[Note],
) -> Result<(), NoteStoreError> {
    let raw = encode_notes(notes)?;
    backend.set(key, &raw)?;
    Ok(())
}

/// Authoritative in-memory note collection with write-through persistence.
pub struct NoteStore<S: KeyValueStore> {
    backend: S,
    storage_key: String,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Opens a store and loads the persisted collection.
    pub fn open(backend: S, config: NoteStoreConfig) -> Self {
        let notes = load_notes(&backend, &config.storage_key);
        Self {
            backend,
            storage_key: config.storage_key,
            notes,
        }
    }

    /// Opens a store using the default storage key.
    pub fn with_backend(backend: S) -> Self {
        Self::open(backend, NoteStoreConfig::default())
    }

    /// Re-reads storage without touching the in-memory collection.
    pub fn load(&self) -> Vec<Note> {
        load_notes(&self.backend, &self.storage_key)
    }

    /// Writes the current collection to storage.
    pub fn save(&mut self) -> Result<(), NoteStoreError> {
        save_notes(&mut self.backend, &self.storage_key, &self.notes)
    }

    /// Creates a note from user input and prepends it.
    ///
    /// # Errors
    /// - `Validation` when trimmed title or content is empty; nothing changes.
    /// - `Storage`/`Encode` when the write fails; nothing changes.
    pub fn add(&mut self, draft: &NoteDraft) -> Result<Note, NoteStoreError> {
        let valid = draft.validate()?;
        let note = Note::with_id(self.fresh_id(), valid, Utc::now().trunc_subsecs(3));

        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note.clone());
        next.extend(self.notes.iter().cloned());
        self.commit(next, "note_add")?;

        info!(
            "event=note_add module=store status=ok note_id={} total={}",
            note.id,
            self.notes.len()
        );
        Ok(note)
    }

    /// Removes the note with `id`.
    ///
    /// Returns `false` without writing when no such note exists.
    pub fn remove(&mut self, id: &str) -> Result<bool, NoteStoreError> {
        if !self.contains(id) {
            debug!("event=note_remove module=store status=noop note_id={id}");
            return Ok(false);
        }

        let next = self
            .notes
            .iter()
            .filter(|note| note.id != id)
            .cloned()
            .collect();
        self.commit(next, "note_remove")?;

        info!(
            "event=note_remove module=store status=ok note_id={id} total={}",
            self.notes.len()
        );
        Ok(true)
    }

    /// Replaces title, tag and content of an existing note.
    ///
    /// # Errors
    /// - `NotFound` when `id` is not in the collection.
    /// - `Validation` when trimmed title or content is empty.
    pub fn update(&mut self, id: &str, draft: &NoteDraft) -> Result<Note, NoteStoreError> {
        let index = self
            .position(id)
            .ok_or_else(|| NoteStoreError::NotFound(id.to_string()))?;
        let valid = draft.validate()?;

        let mut next = self.notes.clone();
        next[index].apply(valid);
        let updated = next[index].clone();
        self.commit(next, "note_update")?;

        info!("event=note_update module=store status=ok note_id={id}");
        Ok(updated)
    }

    /// Edits a note by asking the user for title, tag and content in turn.
    ///
    /// Each prompt is pre-filled with the current value. Cancelling any
    /// prompt aborts the whole edit. A validation failure is shown through
    /// `interaction.notify` and returned as `Validation`.
    pub fn edit<I: Interaction + ?Sized>(
        &mut self,
        id: &str,
        interaction: &mut I,
    ) -> Result<EditOutcome, NoteStoreError> {
        let current = self
            .get(id)
            .cloned()
            .ok_or_else(|| NoteStoreError::NotFound(id.to_string()))?;

        let Some(title) = interaction.ask_text(EDIT_TITLE_LABEL, &current.title) else {
            return Ok(self.edit_cancelled(id));
        };
        let Some(tag) = interaction.ask_text(EDIT_TAG_LABEL, &current.tag) else {
            return Ok(self.edit_cancelled(id));
        };
        let Some(content) = interaction.ask_text(EDIT_CONTENT_LABEL, &current.content) else {
            return Ok(self.edit_cancelled(id));
        };

        match self.update(id, &NoteDraft::new(title, tag, content)) {
            Ok(note) => Ok(EditOutcome::Updated(note)),
            Err(NoteStoreError::Validation(err)) => {
                interaction.notify("Title and content must not be empty.");
                Err(NoteStoreError::Validation(err))
            }
            Err(err) => Err(err),
        }
    }

    /// Removes every note after the user confirms.
    pub fn clear<I: Interaction + ?Sized>(
        &mut self,
        interaction: &mut I,
    ) -> Result<ClearOutcome, NoteStoreError> {
        if self.notes.is_empty() {
            return Ok(ClearOutcome::AlreadyEmpty);
        }
        if !interaction.ask_confirm(CLEAR_CONFIRM_MESSAGE) {
            debug!("event=notes_clear module=store status=cancelled");
            return Ok(ClearOutcome::Cancelled);
        }

        let removed = self.notes.len();
        self.commit(Vec::new(), "notes_clear")?;
        info!("event=notes_clear module=store status=ok removed={removed}");
        Ok(ClearOutcome::Cleared(removed))
    }

    /// Filtered and sorted view; see [`NoteQuery::run`].
    pub fn query(&self, search_text: &str, sort: SortOrder) -> Vec<&Note> {
        self.run_query(&NoteQuery::new(search_text, sort))
    }

    pub fn run_query(&self, query: &NoteQuery) -> Vec<&Note> {
        query.run(&self.notes)
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes in storage order (newest insertion first).
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn fresh_id(&self) -> NoteId {
        loop {
            let id = new_note_id();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    fn edit_cancelled(&self, id: &str) -> EditOutcome {
        debug!("event=note_update module=store status=cancelled note_id={id}");
        EditOutcome::Cancelled
    }

    fn commit(&mut self, next: Vec<Note>, event: &'static str) -> Result<(), NoteStoreError> {
        if let Err(err) = save_notes(&mut self.backend, &self.storage_key, &next) {
            error!("event={event} module=store status=error error_code=persist_failed error={err}");
            return Err(err);
        }
        self.notes = next;
        Ok(())
    }
}
