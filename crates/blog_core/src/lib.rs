//! Data layer for a simple blogging application.
//! This crate is the single source of truth for author/post field rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, level_from_env, logging_status};
pub use model::author::{
    validate_author_field, Author, AuthorField, AuthorId, AuthorPatch, NewAuthor,
};
pub use model::post::{
    validate_post_field, Category, NewPost, Post, PostField, PostId, PostPatch,
};
pub use model::validation::{
    validate_author_name, validate_category, validate_content, validate_phone_number,
    validate_summary, validate_title, ValidationError, CLICKBAIT_PHRASES, CONTENT_MIN_CHARS,
    SUMMARY_MAX_CHARS,
};
pub use repo::author_repo::{AuthorListQuery, AuthorRepository, SqliteAuthorRepository};
pub use repo::error::{RepoError, RepoResult};
pub use repo::post_repo::{PostListQuery, PostRepository, SqlitePostRepository};
pub use service::author_service::AuthorService;
pub use service::post_service::PostService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
