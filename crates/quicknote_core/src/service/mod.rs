//! Note use-cases.
//!
//! # Responsibility
//! - Own the note collection and orchestrate validation, persistence and views.
//! - Keep dialog handling behind the injected `Interaction` trait.

pub mod interaction;
pub mod note_store;
