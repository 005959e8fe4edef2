//! Domain model for user notes.
//!
//! # Responsibility
//! - Define the canonical note record used by store, codec and views.
//!
//! # Invariants
//! - Every note is identified by an id that is never reused.
//! - Validation lives here so every write path shares one rule set.

pub mod note;
