//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `blog_core` linkage and that a store opens and migrates.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `blog_cli [DB_PATH]`. Without a path an in-memory store is used.
//! Logs go to `$BLOG_LOG_DIR` at `$BLOG_LOG_LEVEL` when the directory is set.

use blog_core::db::migrations::{current_user_version, latest_version};
use blog_core::db::{open_db, open_db_in_memory};
use blog_core::{
    AuthorListQuery, AuthorService, PostListQuery, PostService, SqliteAuthorRepository,
    SqlitePostRepository,
};
use std::error::Error;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "BLOG_LOG_DIR";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = blog_core::init_logging(blog_core::level_from_env(), &log_dir) {
            eprintln!("blog_cli logging disabled: {err}");
        }
    }

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_probe module=cli status=error error={err}");
            eprintln!("blog_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(db_path: Option<String>) -> Result<(), Box<dyn Error>> {
    println!("blog_core ping={}", blog_core::ping());
    println!("blog_core version={}", blog_core::core_version());

    let mut conn = match db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    println!(
        "schema version={} latest={}",
        current_user_version(&conn)?,
        latest_version()
    );

    let post_count = {
        let posts = PostService::new(SqlitePostRepository::try_new(&conn)?);
        posts.list_posts(&PostListQuery::default())?.len()
    };
    let authors = AuthorService::new(SqliteAuthorRepository::try_new(&mut conn)?);
    let author_count = authors.list_authors(&AuthorListQuery::default())?.len();
    println!("authors={author_count} posts={post_count}");

    Ok(())
}
