//! Blog record models and their field validation rules.
//!
//! # Responsibility
//! - Define author/post records in unsaved and persisted shapes.
//! - Keep every field rule in one place (`validation`).
//!
//! # Invariants
//! - A record value that exists in memory has passed its format validators.
//! - Storage-dependent rules (author name uniqueness) live in `repo`.

pub mod author;
pub mod post;
pub mod validation;
