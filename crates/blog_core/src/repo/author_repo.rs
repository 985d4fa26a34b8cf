//! Author repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `authors` table.
//! - Own the name uniqueness rule, which needs a storage read.
//!
//! # Invariants
//! - Write paths run `Author::validate()` (or `NewAuthor` construction
//!   checks) before any SQL mutation.
//! - The existence check and the write share one `BEGIN IMMEDIATE`
//!   transaction; the `UNIQUE` column is the final guard and its violation
//!   is reported as `ValidationError::DuplicateAuthorName`.
//! - Read paths reject rows that no longer satisfy field rules.

use crate::model::author::{Author, AuthorId, NewAuthor};
use crate::model::validation::ValidationError;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::schema::{ensure_table_ready, push_pagination};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, ErrorCode, Row, TransactionBehavior};

const AUTHOR_SELECT_SQL: &str = "SELECT
    id,
    name,
    phone_number,
    created_at,
    updated_at
FROM authors";

const AUTHOR_COLUMNS: &[&str] = &["id", "name", "phone_number", "created_at", "updated_at"];

/// Query options for listing authors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorListQuery {
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for author persistence.
pub trait AuthorRepository {
    /// Inserts a new author and returns its generated id.
    fn create_author(&mut self, author: &NewAuthor) -> RepoResult<AuthorId>;
    /// Replaces the mutable fields of an existing author.
    fn update_author(&mut self, author: &Author) -> RepoResult<()>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    /// Exact, case-sensitive name lookup.
    fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>>;
    /// Lists authors ordered by `updated_at DESC, id ASC`.
    fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>>;
    fn delete_author(&mut self, id: AuthorId) -> RepoResult<()>;
}

/// SQLite-backed author repository.
pub struct SqliteAuthorRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteAuthorRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "authors", AUTHOR_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl AuthorRepository for SqliteAuthorRepository<'_> {
    fn create_author(&mut self, author: &NewAuthor) -> RepoResult<AuthorId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        if name_taken(&tx, author.name(), None)? {
            return Err(ValidationError::DuplicateAuthorName.into());
        }

        tx.execute(
            "INSERT INTO authors (name, phone_number) VALUES (?1, ?2);",
            params![author.name(), author.phone_number()],
        )
        .map_err(map_write_error)?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(id)
    }

    fn update_author(&mut self, author: &Author) -> RepoResult<()> {
        author.validate()?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        if name_taken(&tx, author.name(), Some(author.id()))? {
            return Err(ValidationError::DuplicateAuthorName.into());
        }

        let changed = tx
            .execute(
                "UPDATE authors
                 SET
                    name = ?1,
                    phone_number = ?2,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE id = ?3;",
                params![author.name(), author.phone_number(), author.id()],
            )
            .map_err(map_write_error)?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "author",
                id: author.id(),
            });
        }

        tx.commit()?;
        Ok(())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }

        Ok(None)
    }

    fn find_author_by_name(&self, name: &str) -> RepoResult<Option<Author>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{AUTHOR_SELECT_SQL} WHERE name = ?1;"))?;
        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_author_row(row)?));
        }

        Ok(None)
    }

    fn list_authors(&self, query: &AuthorListQuery) -> RepoResult<Vec<Author>> {
        let mut sql = format!("{AUTHOR_SELECT_SQL} ORDER BY updated_at DESC, id ASC");
        let mut bind_values: Vec<Value> = Vec::new();
        push_pagination(&mut sql, &mut bind_values, query.limit, query.offset);

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut authors = Vec::new();

        while let Some(row) = rows.next()? {
            authors.push(parse_author_row(row)?);
        }

        Ok(authors)
    }

    fn delete_author(&mut self, id: AuthorId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM authors WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "author",
                id,
            });
        }

        Ok(())
    }
}

fn name_taken(conn: &Connection, name: &str, exclude: Option<AuthorId>) -> RepoResult<bool> {
    let taken: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM authors
            WHERE name = ?1
              AND (?2 IS NULL OR id != ?2)
        );",
        params![name, exclude],
        |row| row.get(0),
    )?;
    Ok(taken == 1)
}

fn map_write_error(err: rusqlite::Error) -> RepoError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepoError::Validation(ValidationError::DuplicateAuthorName)
        }
        _ => err.into(),
    }
}

fn parse_author_row(row: &Row<'_>) -> RepoResult<Author> {
    let id: AuthorId = row.get("id")?;
    Author::from_parts(
        id,
        row.get("name")?,
        row.get("phone_number")?,
        row.get("created_at")?,
        row.get("updated_at")?,
    )
    .map_err(|err| {
        RepoError::InvalidData(format!(
            "authors.{} for id {id}: {err}",
            err.field()
        ))
    })
}
