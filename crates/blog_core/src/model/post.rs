//! Post domain model.
//!
//! # Responsibility
//! - Define the unsaved (`NewPost`) and persisted (`Post`) shapes.
//! - Keep title/content/summary/category rules attached to assignment.
//!
//! # Invariants
//! - `title` always contains a clickbait phrase.
//! - `content` is at least 250 characters; `summary` at most 250 when set.
//! - `category` is a closed enum, so an invalid literal cannot be stored.

use crate::model::validation::{
    validate_category, validate_content, validate_summary, validate_title, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Storage-assigned post identifier.
pub type PostId = i64;

/// Post category.
///
/// Serialized and stored as the literals `Fiction` and `Non-Fiction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    /// Every accepted category, in display order.
    pub const ALL: [Category; 2] = [Category::Fiction, Category::NonFiction];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_category(s)
    }
}

impl TryFrom<String> for Category {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_category(&value)
    }
}

/// Assignable post fields, keyed by their storage column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostField {
    Title,
    Content,
    Summary,
    Category,
}

impl PostField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Summary => "summary",
            Self::Category => "category",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "title" => Some(Self::Title),
            "content" => Some(Self::Content),
            "summary" => Some(Self::Summary),
            "category" => Some(Self::Category),
            _ => None,
        }
    }
}

/// Pre-write hook for a single post field.
///
/// A missing value is only acceptable for `summary`; the required fields
/// report the same rejection as an empty value would.
pub fn validate_post_field(
    field: PostField,
    value: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    match field {
        PostField::Title => {
            let title = value.unwrap_or_default();
            validate_title(title)?;
            Ok(Some(title.to_string()))
        }
        PostField::Content => {
            let content = value.unwrap_or_default();
            validate_content(content)?;
            Ok(Some(content.to_string()))
        }
        PostField::Summary => {
            validate_summary(value)?;
            Ok(value.map(str::to_string))
        }
        PostField::Category => {
            let category = validate_category(value.unwrap_or_default())?;
            Ok(Some(category.as_str().to_string()))
        }
    }
}

/// Post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewPostPayload")]
pub struct NewPost {
    title: String,
    content: String,
    summary: Option<String>,
    category: Category,
}

#[derive(Deserialize)]
struct NewPostPayload {
    title: String,
    content: String,
    #[serde(default)]
    summary: Option<String>,
    category: String,
}

impl TryFrom<NewPostPayload> for NewPost {
    type Error = ValidationError;

    fn try_from(value: NewPostPayload) -> Result<Self, Self::Error> {
        Self::new(value.title, value.content, value.summary, &value.category)
    }
}

impl NewPost {
    /// Builds a validated post draft. Fields are checked in declaration order
    /// and the first violation is returned.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        summary: Option<String>,
        category: &str,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let content = content.into();
        validate_title(&title)?;
        validate_content(&content)?;
        validate_summary(summary.as_deref())?;
        let category = validate_category(category)?;
        Ok(Self {
            title,
            content,
            summary,
            category,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Partial update for an existing post.
///
/// `summary: Some(None)` clears the summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<Option<String>>,
    pub category: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.summary.is_none()
            && self.category.is_none()
    }
}

/// Persisted post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostPayload")]
pub struct Post {
    id: PostId,
    title: String,
    content: String,
    summary: Option<String>,
    category: Category,
    created_at: i64,
    updated_at: i64,
}

#[derive(Deserialize)]
struct PostPayload {
    id: PostId,
    title: String,
    content: String,
    #[serde(default)]
    summary: Option<String>,
    category: Category,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<PostPayload> for Post {
    type Error = ValidationError;

    fn try_from(value: PostPayload) -> Result<Self, Self::Error> {
        let post = Self {
            id: value.id,
            title: value.title,
            content: value.content,
            summary: value.summary,
            category: value.category,
            created_at: value.created_at,
            updated_at: value.updated_at,
        };
        post.validate()?;
        Ok(post)
    }
}

impl Post {
    /// Rebuilds a post from stored columns, re-running field validators.
    pub(crate) fn from_parts(
        id: PostId,
        title: String,
        content: String,
        summary: Option<String>,
        category: &str,
        created_at: i64,
        updated_at: i64,
    ) -> Result<Self, ValidationError> {
        let post = Self {
            id,
            title,
            content,
            summary,
            category: validate_category(category)?,
            created_at,
            updated_at,
        };
        post.validate()?;
        Ok(post)
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        let content = content.into();
        validate_content(&content)?;
        self.content = content;
        Ok(())
    }

    pub fn set_summary(&mut self, summary: Option<String>) -> Result<(), ValidationError> {
        validate_summary(summary.as_deref())?;
        self.summary = summary;
        Ok(())
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), ValidationError> {
        self.category = validate_category(category)?;
        Ok(())
    }

    /// Applies every field of `patch`, all or nothing.
    pub fn apply_patch(&mut self, patch: &PostPatch) -> Result<(), ValidationError> {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.set_title(title.as_str())?;
        }
        if let Some(content) = &patch.content {
            next.set_content(content.as_str())?;
        }
        if let Some(summary) = &patch.summary {
            next.set_summary(summary.clone())?;
        }
        if let Some(category) = &patch.category {
            next.set_category(category)?;
        }
        *self = next;
        Ok(())
    }

    /// Re-runs all field validators over the current values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;
        validate_content(&self.content)?;
        validate_summary(self.summary.as_deref())
    }
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Post(id={}, title={}, content={}, summary={})",
            self.id,
            self.title,
            self.content,
            self.summary.as_deref().unwrap_or("None")
        )
    }
}
