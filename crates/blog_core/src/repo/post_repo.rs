//! Post repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `posts` table.
//!
//! # Invariants
//! - Write paths validate every field before SQL mutations.
//! - `category` is stored as its literal (`Fiction` / `Non-Fiction`).

use crate::model::post::{Category, NewPost, Post, PostId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::schema::{ensure_table_ready, push_pagination};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const POST_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    summary,
    category,
    created_at,
    updated_at
FROM posts";

const POST_COLUMNS: &[&str] = &[
    "id",
    "title",
    "content",
    "summary",
    "category",
    "created_at",
    "updated_at",
];

/// Query options for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostListQuery {
    pub category: Option<Category>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for post persistence.
pub trait PostRepository {
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId>;
    fn update_post(&self, post: &Post) -> RepoResult<()>;
    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>>;
    /// Lists posts ordered by `updated_at DESC, id ASC`.
    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>>;
    fn delete_post(&self, id: PostId) -> RepoResult<()>;
}

/// SQLite-backed post repository.
pub struct SqlitePostRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePostRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "posts", POST_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl PostRepository for SqlitePostRepository<'_> {
    fn create_post(&self, post: &NewPost) -> RepoResult<PostId> {
        self.conn.execute(
            "INSERT INTO posts (title, content, summary, category)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                post.title(),
                post.content(),
                post.summary(),
                post.category().as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_post(&self, post: &Post) -> RepoResult<()> {
        post.validate()?;

        let changed = self.conn.execute(
            "UPDATE posts
             SET
                title = ?1,
                content = ?2,
                summary = ?3,
                category = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?5;",
            params![
                post.title(),
                post.content(),
                post.summary(),
                post.category().as_str(),
                post.id(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "post",
                id: post.id(),
            });
        }

        Ok(())
    }

    fn get_post(&self, id: PostId) -> RepoResult<Option<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POST_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_post_row(row)?));
        }

        Ok(None)
    }

    fn list_posts(&self, query: &PostListQuery) -> RepoResult<Vec<Post>> {
        let mut sql = format!("{POST_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(category) = query.category {
            sql.push_str(" AND category = ?");
            bind_values.push(Value::Text(category.as_str().to_string()));
        }

        sql.push_str(" ORDER BY updated_at DESC, id ASC");
        push_pagination(&mut sql, &mut bind_values, query.limit, query.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut posts = Vec::new();

        while let Some(row) = rows.next()? {
            posts.push(parse_post_row(row)?);
        }

        Ok(posts)
    }

    fn delete_post(&self, id: PostId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM posts WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound { entity: "post", id });
        }

        Ok(())
    }
}

fn parse_post_row(row: &Row<'_>) -> RepoResult<Post> {
    let id: PostId = row.get("id")?;
    let category: String = row.get("category")?;
    Post::from_parts(
        id,
        row.get("title")?,
        row.get("content")?,
        row.get("summary")?,
        &category,
        row.get("created_at")?,
        row.get("updated_at")?,
    )
    .map_err(|err| RepoError::InvalidData(format!("posts.{} for id {id}: {err}", err.field())))
}
