//! Core domain logic for QuickNote.
//! This crate owns the note collection and every rule applied to it.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use config::{NoteStoreConfig, DEFAULT_STORAGE_KEY};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::note::{Note, NoteDraft, NoteId, NoteValidationError};
pub use repo::kv_repo::{KeyValueStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};
pub use search::query::{NoteQuery, ParseSortOrderError, SortOrder};
pub use service::interaction::{Interaction, ScriptedAnswer, ScriptedInteraction};
pub use service::note_store::{
    load_notes, save_notes, ClearOutcome, EditOutcome, NoteStore, NoteStoreError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
