//! Read-only note views.
//!
//! # Responsibility
//! - Turn search text and a sort order into a display sequence.

pub mod query;
