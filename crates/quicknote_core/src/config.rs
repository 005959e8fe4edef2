//! Store configuration.

/// Key the collection is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "notes_app_v1";

/// Options for opening a [`crate::NoteStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteStoreConfig {
    /// Key-value key holding the serialized collection.
    pub storage_key: String,
}

impl NoteStoreConfig {
    pub fn with_storage_key(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

impl Default for NoteStoreConfig {
    fn default() -> Self {
        Self::with_storage_key(DEFAULT_STORAGE_KEY)
    }
}
