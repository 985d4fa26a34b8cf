//! Field validation rules shared by author and post records.
//!
//! # Responsibility
//! - Own the closed constant sets (clickbait phrases, category literals).
//! - Provide pure, single-field validators used on every field assignment.
//! - Define the single validation error kind surfaced to callers.
//!
//! # Invariants
//! - Validators never mutate input; accepted values are returned unchanged,
//!   except author names which are returned trimmed.
//! - Lengths are measured in Unicode scalar values, not bytes.
//! - Author name uniqueness is NOT checked here; it needs storage access and
//!   lives in the author repository.

use crate::model::post::Category;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Phrases of which at least one must appear in every post title.
///
/// Matching is a case-sensitive substring test.
pub const CLICKBAIT_PHRASES: [&str; 4] = ["Won't Believe", "Secret", "Top", "Guess"];

/// Minimum post content length in characters.
pub const CONTENT_MIN_CHARS: usize = 250;

/// Maximum post summary length in characters.
pub const SUMMARY_MAX_CHARS: usize = 250;

/// Exact number of digits in an author phone number.
pub const PHONE_NUMBER_DIGITS: usize = 10;

static PHONE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[0-9]{{{PHONE_NUMBER_DIGITS}}}$")).expect("valid phone number regex")
});

/// Rejection of a proposed field value.
///
/// `Display` renders the user-facing message for the violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty or whitespace only.
    MissingAuthorName,
    /// Another author already uses this name.
    DuplicateAuthorName,
    /// Phone number is not exactly ten ASCII digits.
    InvalidPhoneNumber,
    /// Title contains none of [`CLICKBAIT_PHRASES`].
    NotClickbaitTitle,
    /// Content is shorter than [`CONTENT_MIN_CHARS`].
    ContentTooShort { chars: usize },
    /// Summary is longer than [`SUMMARY_MAX_CHARS`].
    SummaryTooLong { chars: usize },
    /// Category is not one of the accepted literals.
    InvalidCategory { value: String },
}

impl ValidationError {
    /// Returns the storage column / field name the rule applies to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingAuthorName | Self::DuplicateAuthorName => "name",
            Self::InvalidPhoneNumber => "phone_number",
            Self::NotClickbaitTitle => "title",
            Self::ContentTooShort { .. } => "content",
            Self::SummaryTooLong { .. } => "summary",
            Self::InvalidCategory { .. } => "category",
        }
    }

    /// Returns the human-readable rule message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingAuthorName => "Author name is required.",
            Self::DuplicateAuthorName => "Author name must be unique.",
            Self::InvalidPhoneNumber => "Phone number must be exactly 10 digits.",
            Self::NotClickbaitTitle => "Title must be clickbait-y.",
            Self::ContentTooShort { .. } => "Content must be at least 250 characters.",
            Self::SummaryTooLong { .. } => "Summary must be 250 characters or less.",
            Self::InvalidCategory { .. } => "Category must be Fiction or Non-Fiction.",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ValidationError {}

/// Checks an author name and returns it trimmed.
///
/// # Errors
/// - [`ValidationError::MissingAuthorName`] when empty after trimming.
pub fn validate_author_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAuthorName);
    }
    Ok(trimmed.to_string())
}

/// Checks that `number` is exactly ten raw ASCII digits.
///
/// No normalization happens: `"555-123-4567"` is rejected.
pub fn validate_phone_number(number: &str) -> Result<(), ValidationError> {
    if PHONE_NUMBER_RE.is_match(number) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneNumber)
    }
}

/// Checks an optional phone number; `None` is always accepted.
pub fn validate_optional_phone_number(number: Option<&str>) -> Result<(), ValidationError> {
    match number {
        Some(number) => validate_phone_number(number),
        None => Ok(()),
    }
}

/// Checks that a title carries at least one clickbait phrase.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if CLICKBAIT_PHRASES.iter().any(|phrase| title.contains(phrase)) {
        Ok(())
    } else {
        Err(ValidationError::NotClickbaitTitle)
    }
}

/// Checks that content has at least [`CONTENT_MIN_CHARS`] characters.
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    let chars = content.chars().count();
    if chars < CONTENT_MIN_CHARS {
        return Err(ValidationError::ContentTooShort { chars });
    }
    Ok(())
}

/// Checks an optional summary; absent summaries are accepted.
pub fn validate_summary(summary: Option<&str>) -> Result<(), ValidationError> {
    let Some(summary) = summary else {
        return Ok(());
    };

    let chars = summary.chars().count();
    if chars > SUMMARY_MAX_CHARS {
        return Err(ValidationError::SummaryTooLong { chars });
    }
    Ok(())
}

/// Parses a category literal. Only exact `Fiction` / `Non-Fiction` pass.
pub fn validate_category(category: &str) -> Result<Category, ValidationError> {
    Category::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == category)
        .ok_or_else(|| ValidationError::InvalidCategory {
            value: category.to_string(),
        })
}
