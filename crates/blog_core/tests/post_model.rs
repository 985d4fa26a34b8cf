use blog_core::{Category, NewPost, ValidationError, CLICKBAIT_PHRASES};

fn content(chars: usize) -> String {
    "a".repeat(chars)
}

#[test]
fn clickbait_post_without_summary_is_accepted() {
    let post = NewPost::new("Top 10 Facts", content(250), None, "Fiction").unwrap();

    assert_eq!(post.title(), "Top 10 Facts");
    assert_eq!(post.summary(), None);
    assert_eq!(post.category(), Category::Fiction);
}

#[test]
fn every_clickbait_phrase_is_accepted() {
    for phrase in CLICKBAIT_PHRASES {
        let title = format!("This {phrase} headline");
        assert!(
            NewPost::new(title.as_str(), content(300), None, "Non-Fiction").is_ok(),
            "{title} should be accepted"
        );
    }
}

#[test]
fn plain_title_is_rejected_regardless_of_other_fields() {
    let err = NewPost::new(
        "Boring News",
        content(400),
        Some("short".to_string()),
        "Fiction",
    )
    .unwrap_err();
    assert_eq!(err, ValidationError::NotClickbaitTitle);
    assert_eq!(err.to_string(), "Title must be clickbait-y.");
}

#[test]
fn content_length_boundary() {
    let err = NewPost::new("Top Picks", content(249), None, "Fiction").unwrap_err();
    assert_eq!(err, ValidationError::ContentTooShort { chars: 249 });
    assert_eq!(err.to_string(), "Content must be at least 250 characters.");

    assert!(NewPost::new("Top Picks", content(250), None, "Fiction").is_ok());
}

#[test]
fn summary_length_boundary() {
    let err = NewPost::new("Top Picks", content(250), Some("s".repeat(251)), "Fiction")
        .unwrap_err();
    assert_eq!(err, ValidationError::SummaryTooLong { chars: 251 });
    assert_eq!(err.to_string(), "Summary must be 250 characters or less.");

    let post = NewPost::new("Top Picks", content(250), Some("s".repeat(250)), "Fiction").unwrap();
    assert_eq!(post.summary().map(str::len), Some(250));
}

#[test]
fn misspelled_category_is_rejected() {
    let err = NewPost::new("Top Picks", content(250), None, "Nonfiction").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidCategory {
            value: "Nonfiction".to_string()
        }
    );
    assert_eq!(err.to_string(), "Category must be Fiction or Non-Fiction.");
}

#[test]
fn new_post_serialization_uses_category_literals() {
    let post = NewPost::new("Guess Who", content(260), None, "Non-Fiction").unwrap();

    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["category"], "Non-Fiction");
    assert_eq!(json["summary"], serde_json::Value::Null);

    let decoded: NewPost = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, post);
}

#[test]
fn deserialize_rejects_short_content() {
    let value = serde_json::json!({
        "title": "The Secret Life of Bees",
        "content": "too short",
        "category": "Fiction"
    });

    let err = serde_json::from_value::<NewPost>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("Content must be at least 250 characters."),
        "unexpected error: {err}"
    );
}

#[test]
fn category_deserialize_rejects_wrong_casing() {
    let err = serde_json::from_value::<Category>(serde_json::json!("fiction")).unwrap_err();
    assert!(err.to_string().contains("Category must be Fiction or Non-Fiction."));
}
