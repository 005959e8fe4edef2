//! JSON codec for the persisted note collection.
//!
//! # Responsibility
//! - Encode the full collection as one JSON array.
//! - Decode stored text, classifying unreadable payloads instead of failing.
//!
//! # Invariants
//! - Encoding preserves collection order.
//! - Decoding never panics; callers choose how to recover from `CorruptPayload`.
//! - Decoded collections never contain two notes with the same id.

use crate::model::note::Note;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};

/// Why a stored payload could not be used at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorruptPayload {
    /// Text is not valid JSON.
    InvalidJson(String),
    /// Valid JSON, but the top-level value is not an array.
    NotAnArray(&'static str),
}

impl Display for CorruptPayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(message) => write!(f, "invalid json: {message}"),
            Self::NotAnArray(kind) => write!(f, "expected array, found {kind}"),
        }
    }
}

/// Decoded collection plus counts of entries that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedNotes {
    pub notes: Vec<Note>,
    /// Array elements that were not valid notes.
    pub skipped_invalid: usize,
    /// Later elements whose id was already seen.
    pub skipped_duplicate: usize,
}

/// Serializes the collection in order.
pub fn encode_notes(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string(notes)
}

/// Parses stored text into notes.
///
/// Invalid elements inside a well-formed array are skipped one by one so a
/// single bad record does not discard the rest.
pub fn decode_notes(raw: &str) -> Result<DecodedNotes, CorruptPayload> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| CorruptPayload::InvalidJson(err.to_string()))?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(CorruptPayload::NotAnArray(json_kind(&other))),
    };

    let mut decoded = DecodedNotes::default();
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let Ok(note) = serde_json::from_value::<Note>(item) else {
            decoded.skipped_invalid += 1;
            continue;
        };
        if !seen.insert(note.id.clone()) {
            decoded.skipped_duplicate += 1;
            continue;
        }
        decoded.notes.push(note);
    }
    Ok(decoded)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_notes, encode_notes, CorruptPayload};
    use crate::model::note::{Note, NoteDraft};
    use chrono::{TimeZone, Utc};

    fn note(id: &str, title: &str) -> Note {
        Note::with_id(
            id,
            NoteDraft::new(title, "", "body").validate().unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn decode_rejects_plain_text() {
        let err = decode_notes("not json").unwrap_err();
        assert!(matches!(err, CorruptPayload::InvalidJson(_)));
    }

    #[test]
    fn decode_rejects_object_top_level() {
        let err = decode_notes(r#"{"id":"1"}"#).unwrap_err();
        assert_eq!(err, CorruptPayload::NotAnArray("object"));
    }

    #[test]
    fn decode_skips_invalid_elements_and_keeps_the_rest() {
        let raw = r#"[
            {"id":"a","title":"A","tag":"","content":"x","createdAt":"2025-01-16T06:30:00.000Z"},
            {"id":"b","title":"B"},
            42,
            {"id":"c","title":"C","tag":"work","content":"y","createdAt":"2025-01-17T06:30:00.000Z"}
        ]"#;
        let decoded = decode_notes(raw).unwrap();
        let ids: Vec<&str> = decoded.notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(decoded.skipped_invalid, 2);
    }

    #[test]
    fn decode_drops_later_duplicate_ids() {
        let raw = encode_notes(&[note("a", "first"), note("a", "second")]).unwrap();
        let decoded = decode_notes(&raw).unwrap();
        assert_eq!(decoded.notes.len(), 1);
        assert_eq!(decoded.notes[0].title, "first");
        assert_eq!(decoded.skipped_duplicate, 1);
    }

    #[test]
    fn encode_writes_expected_field_names() {
        let raw = encode_notes(&[note("a", "A")]).unwrap();
        for field in ["\"id\"", "\"title\"", "\"tag\"", "\"content\"", "\"createdAt\""] {
            assert!(raw.contains(field), "missing {field} in {raw}");
        }
    }
}
