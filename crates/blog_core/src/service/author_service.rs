//! Author use-case service.
//!
//! # Responsibility
//! - Provide create / partial-update / get / list / delete entry points.
//! - Re-run field validators on every touched field of a partial update.
//!
//! # Invariants
//! - Service APIs never bypass repository validation and uniqueness checks.
//! - Logged events carry ids and field names only, never field values.

use crate::model::author::{Author, AuthorId, AuthorPatch, NewAuthor};
use crate::model::validation::{validate_author_name, ValidationError};
use crate::repo::author_repo::{AuthorListQuery, AuthorRepository};
use crate::repo::error::{RepoError, RepoResult};
use log::{info, warn};

/// Use-case service wrapper for author operations.
pub struct AuthorService<R: AuthorRepository> {
    repo: R,
}

impl<R: AuthorRepository> AuthorService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Full name check: format rule plus uniqueness lookup.
    ///
    /// Returns the trimmed name on success. Advisory only; the write path
    /// repeats the lookup inside its own transaction.
    pub fn validate_name(&self, name: &str) -> RepoResult<String> {
        let name = validate_author_name(name)?;
        if self.repo.find_author_by_name(&name)?.is_some() {
            return Err(ValidationError::DuplicateAuthorName.into());
        }
        Ok(name)
    }

    /// Persists a new author and returns the stored record.
    pub fn create_author(&mut self, author: &NewAuthor) -> RepoResult<Author> {
        let id = match self.repo.create_author(author) {
            Ok(id) => id,
            Err(err) => {
                log_rejection("author_create", None, &err);
                return Err(err);
            }
        };

        info!("event=author_create module=service status=ok author_id={id}");
        self.read_back(id)
    }

    /// Applies a partial update; untouched fields keep their stored values.
    ///
    /// An empty patch returns the current record without writing.
    pub fn update_author(&mut self, id: AuthorId, patch: &AuthorPatch) -> RepoResult<Author> {
        let mut author = self.read_back(id)?;
        if patch.is_empty() {
            return Ok(author);
        }

        let result = author
            .apply_patch(patch)
            .map_err(RepoError::from)
            .and_then(|()| self.repo.update_author(&author));
        if let Err(err) = result {
            log_rejection("author_update", Some(id), &err);
            return Err(err);
        }

        info!("event=author_update module=service status=ok author_id={id}");
        self.read_back(id)
    }

    pub fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        self.repo.get_author(id)
    }

    pub fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>> {
        self.repo.find_author_by_name(name.trim())
    }

    pub fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>> {
        self.repo.list_authors(query)
    }

    pub fn delete_author(&mut self, id: AuthorId) -> RepoResult<()> {
        self.repo.delete_author(id)?;
        info!("event=author_delete module=service status=ok author_id={id}");
        Ok(())
    }

    fn read_back(&self, id: AuthorId) -> RepoResult<Author> {
        self.repo.get_author(id)?.ok_or(RepoError::NotFound {
            entity: "author",
            id,
        })
    }
}

fn log_rejection(event: &str, id: Option<AuthorId>, err: &RepoError) {
    let author_id = id.map_or_else(|| "none".to_string(), |id| id.to_string());
    match err.as_validation() {
        Some(validation) => warn!(
            "event={event} module=service status=rejected author_id={author_id} field={}",
            validation.field()
        ),
        None => warn!(
            "event={event} module=service status=error author_id={author_id} error={err}"
        ),
    }
}
