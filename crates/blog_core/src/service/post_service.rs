//! Post use-case service.
//!
//! # Responsibility
//! - Provide create / partial-update / get / list / delete entry points.
//!
//! # Invariants
//! - A rejected field aborts the whole write; no partial success.
//! - Post bodies and titles are never written to logs.

use crate::model::post::{NewPost, Post, PostId, PostPatch};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::post_repo::{PostListQuery, PostRepository};
use log::{info, warn};

/// Use-case service wrapper for post operations.
pub struct PostService<R: PostRepository> {
    repo: R,
}

impl<R: PostRepository> PostService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new post and returns the stored record.
    pub fn create_post(&self, post: &NewPost) -> RepoResult<Post> {
        let id = self.repo.create_post(post)?;
        info!(
            "event=post_create module=service status=ok post_id={id} category={}",
            post.category()
        );
        self.read_back(id)
    }

    /// Applies a partial update, re-validating every touched field.
    pub fn update_post(&self, id: PostId, patch: &PostPatch) -> RepoResult<Post> {
        let mut post = self.read_back(id)?;
        if patch.is_empty() {
            return Ok(post);
        }

        if let Err(err) = post.apply_patch(patch) {
            warn!(
                "event=post_update module=service status=rejected post_id={id} field={}",
                err.field()
            );
            return Err(err.into());
        }
        self.repo.update_post(&post)?;

        info!("event=post_update module=service status=ok post_id={id}");
        self.read_back(id)
    }

    pub fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        self.repo.get_post(id)
    }

    pub fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        self.repo.list_posts(query)
    }

    pub fn delete_post(&self, id: PostId) -> RepoResult<()> {
        self.repo.delete_post(id)?;
        info!("event=post_delete module=service status=ok post_id={id}");
        Ok(())
    }

    fn read_back(&self, id: PostId) -> RepoResult<Post> {
        self.repo
            .get_post(id)?
            .ok_or(RepoError::NotFound { entity: "post", id })
    }
}
