//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define record-oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes never persist a value that fails a field validator.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`) in
//!   addition to DB transport errors.

pub mod author_repo;
pub mod error;
pub mod post_repo;
mod schema;
