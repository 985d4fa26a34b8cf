use blog_core::db::migrations::latest_version;
use blog_core::db::open_db_in_memory;
use blog_core::{
    Category, NewPost, PostListQuery, PostPatch, PostRepository, PostService, RepoError,
    SqlitePostRepository, ValidationError,
};
use rusqlite::Connection;

fn content(chars: usize) -> String {
    "a".repeat(chars)
}

fn new_post(title: &str, category: &str) -> NewPost {
    NewPost::new(title, content(300), None, category).unwrap()
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());

    let draft = NewPost::new(
        "Top 10 Facts",
        content(250),
        Some("s".repeat(250)),
        "Non-Fiction",
    )
    .unwrap();
    let created = service.create_post(&draft).unwrap();

    let loaded = service.get_post(created.id()).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.title(), "Top 10 Facts");
    assert_eq!(loaded.content().chars().count(), 250);
    assert_eq!(loaded.summary().map(str::len), Some(250));
    assert_eq!(loaded.category(), Category::NonFiction);
}

#[test]
fn stored_category_uses_literal() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::try_new(&conn).unwrap();
    let id = repo.create_post(&new_post("Guess What", "Non-Fiction")).unwrap();

    let stored: String = conn
        .query_row("SELECT category FROM posts WHERE id = ?1;", [id], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(stored, "Non-Fiction");
}

#[test]
fn partial_update_rejects_each_rule_and_keeps_stored_row() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    let created = service.create_post(&new_post("Top Secret", "Fiction")).unwrap();

    let cases = [
        (
            PostPatch {
                title: Some("Boring News".to_string()),
                ..PostPatch::default()
            },
            ValidationError::NotClickbaitTitle,
        ),
        (
            PostPatch {
                content: Some(content(249)),
                ..PostPatch::default()
            },
            ValidationError::ContentTooShort { chars: 249 },
        ),
        (
            PostPatch {
                summary: Some(Some("s".repeat(251))),
                ..PostPatch::default()
            },
            ValidationError::SummaryTooLong { chars: 251 },
        ),
        (
            PostPatch {
                category: Some("Nonfiction".to_string()),
                ..PostPatch::default()
            },
            ValidationError::InvalidCategory {
                value: "Nonfiction".to_string(),
            },
        ),
    ];

    for (patch, expected) in cases {
        let err = service.update_post(created.id(), &patch).unwrap_err();
        match err {
            RepoError::Validation(actual) => assert_eq!(actual, expected),
            other => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(service.get_post(created.id()).unwrap().unwrap(), created);
}

#[test]
fn partial_update_applies_valid_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    let created = service.create_post(&new_post("Top Secret", "Fiction")).unwrap();

    let patch = PostPatch {
        content: Some(content(250)),
        summary: Some(Some("brief".to_string())),
        category: Some("Non-Fiction".to_string()),
        ..PostPatch::default()
    };
    let updated = service.update_post(created.id(), &patch).unwrap();

    assert_eq!(updated.title(), "Top Secret");
    assert_eq!(updated.content().len(), 250);
    assert_eq!(updated.summary(), Some("brief"));
    assert_eq!(updated.category(), Category::NonFiction);
    assert_eq!(updated.created_at(), created.created_at());

    let cleared = service
        .update_post(
            created.id(),
            &PostPatch {
                summary: Some(None),
                ..PostPatch::default()
            },
        )
        .unwrap();
    assert_eq!(cleared.summary(), None);
}

#[test]
fn update_and_delete_missing_post_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());

    assert!(matches!(
        service.update_post(5, &PostPatch::default()).unwrap_err(),
        RepoError::NotFound {
            entity: "post",
            id: 5
        }
    ));
    assert!(matches!(
        service.delete_post(5).unwrap_err(),
        RepoError::NotFound { entity: "post", .. }
    ));
}

#[test]
fn delete_removes_post() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    let created = service.create_post(&new_post("Top Secret", "Fiction")).unwrap();

    service.delete_post(created.id()).unwrap();
    assert!(service.get_post(created.id()).unwrap().is_none());
}

#[test]
fn list_filters_by_category() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::try_new(&conn).unwrap();
    repo.create_post(&new_post("Top Fiction", "Fiction")).unwrap();
    let essay = repo
        .create_post(&new_post("Secret Essay", "Non-Fiction"))
        .unwrap();
    repo.create_post(&new_post("Guess Again", "Fiction")).unwrap();

    let query = PostListQuery {
        category: Some(Category::NonFiction),
        ..PostListQuery::default()
    };
    let result = repo.list_posts(&query).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id(), essay);

    assert_eq!(repo.list_posts(&PostListQuery::default()).unwrap().len(), 3);
}

#[test]
fn list_orders_by_updated_at_desc_then_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePostRepository::try_new(&conn).unwrap();
    let first = repo.create_post(&new_post("Top 1", "Fiction")).unwrap();
    let second = repo.create_post(&new_post("Top 2", "Fiction")).unwrap();
    let third = repo.create_post(&new_post("Top 3", "Fiction")).unwrap();

    conn.execute("UPDATE posts SET updated_at = 1000;", []).unwrap();
    conn.execute("UPDATE posts SET updated_at = 2000 WHERE id = ?1;", [third])
        .unwrap();

    let ids: Vec<i64> = repo
        .list_posts(&PostListQuery {
            limit: Some(2),
            ..PostListQuery::default()
        })
        .unwrap()
        .iter()
        .map(|post| post.id())
        .collect();
    assert_eq!(ids, vec![third, first]);

    let rest = repo
        .list_posts(&PostListQuery {
            offset: 2,
            ..PostListQuery::default()
        })
        .unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].id(), second);
}

#[test]
fn read_path_rejects_non_clickbait_title() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO posts (id, title, content, category) VALUES (3, 'Boring News', ?1, 'Fiction');",
        [content(250)],
    )
    .unwrap();

    let repo = SqlitePostRepository::try_new(&conn).unwrap();
    match repo.get_post(3).unwrap_err() {
        RepoError::InvalidData(message) => assert!(message.contains("posts.title")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_rejects_connection_without_posts_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqlitePostRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("posts"))
    ));
}

#[test]
fn post_serialization_round_trips_through_json() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    let created = service.create_post(&new_post("Top Secret", "Fiction")).unwrap();

    let json = serde_json::to_value(&created).unwrap();
    assert_eq!(json["category"], "Fiction");
    assert_eq!(json["id"], created.id());

    let decoded: blog_core::Post = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, created);
}
