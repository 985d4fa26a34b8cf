//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep callers (HTTP handlers, CLIs, batch jobs) decoupled from storage.

pub mod author_service;
pub mod post_service;
