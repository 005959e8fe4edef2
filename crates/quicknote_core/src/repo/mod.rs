//! Persistence layer for the note collection.
//!
//! # Responsibility
//! - Define the key-value contract the note store writes through.
//! - Own the JSON shape of the persisted collection.
//!
//! # Invariants
//! - The whole collection lives under one key and is rewritten on each save.

pub mod kv_repo;
pub mod note_codec;
