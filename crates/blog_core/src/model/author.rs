//! Author domain model.
//!
//! # Responsibility
//! - Define the unsaved (`NewAuthor`) and persisted (`Author`) shapes.
//! - Run field validators on every assignment and on partial updates.
//!
//! # Invariants
//! - `name` is stored trimmed and is never blank.
//! - `phone_number`, when present, is exactly ten ASCII digits.
//! - `id` and `created_at` never change once assigned by storage.
//! - Name uniqueness is enforced by the repository, not by this type.

use crate::model::validation::{
    validate_author_name, validate_optional_phone_number, ValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Storage-assigned author identifier.
pub type AuthorId = i64;

/// Assignable author fields, keyed by their storage column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorField {
    Name,
    PhoneNumber,
}

impl AuthorField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PhoneNumber => "phone_number",
        }
    }

    /// Resolves a column name; unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "phone_number" => Some(Self::PhoneNumber),
            _ => None,
        }
    }
}

/// Pre-write hook for a single author field.
///
/// Receives the proposed value and returns the value to store, or the
/// rejection that must abort the write. Only format rules run here.
pub fn validate_author_field(
    field: AuthorField,
    value: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    match field {
        AuthorField::Name => {
            let name = value.ok_or(ValidationError::MissingAuthorName)?;
            validate_author_name(name).map(Some)
        }
        AuthorField::PhoneNumber => {
            validate_optional_phone_number(value)?;
            Ok(value.map(str::to_string))
        }
    }
}

/// Author that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewAuthorPayload")]
pub struct NewAuthor {
    name: String,
    phone_number: Option<String>,
}

#[derive(Deserialize)]
struct NewAuthorPayload {
    name: String,
    #[serde(default)]
    phone_number: Option<String>,
}

impl TryFrom<NewAuthorPayload> for NewAuthor {
    type Error = ValidationError;

    fn try_from(value: NewAuthorPayload) -> Result<Self, Self::Error> {
        Self::new(value.name, value.phone_number)
    }
}

impl NewAuthor {
    /// Builds a validated author draft.
    ///
    /// # Errors
    /// - Blank `name`.
    /// - `phone_number` present but not ten digits.
    pub fn new(
        name: impl AsRef<str>,
        phone_number: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = validate_author_name(name.as_ref())?;
        validate_optional_phone_number(phone_number.as_deref())?;
        Ok(Self { name, phone_number })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
}

/// Partial update for an existing author.
///
/// `None` leaves a field untouched. `phone_number: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorPatch {
    pub name: Option<String>,
    pub phone_number: Option<Option<String>>,
}

impl AuthorPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none()
    }
}

/// Persisted author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthorPayload")]
pub struct Author {
    id: AuthorId,
    name: String,
    phone_number: Option<String>,
    /// Unix epoch milliseconds.
    created_at: i64,
    /// Unix epoch milliseconds; equals `created_at` until first update.
    updated_at: i64,
}

#[derive(Deserialize)]
struct AuthorPayload {
    id: AuthorId,
    name: String,
    #[serde(default)]
    phone_number: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<AuthorPayload> for Author {
    type Error = ValidationError;

    fn try_from(value: AuthorPayload) -> Result<Self, Self::Error> {
        Self::from_parts(
            value.id,
            value.name,
            value.phone_number,
            value.created_at,
            value.updated_at,
        )
    }
}

impl Author {
    /// Rebuilds an author from stored columns, re-running field validators.
    pub(crate) fn from_parts(
        id: AuthorId,
        name: String,
        phone_number: Option<String>,
        created_at: i64,
        updated_at: i64,
    ) -> Result<Self, ValidationError> {
        let author = Self {
            id,
            name,
            phone_number,
            created_at,
            updated_at,
        };
        author.validate()?;
        Ok(author)
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    /// Assigns a new name after format validation. Stored trimmed.
    pub fn set_name(&mut self, name: impl AsRef<str>) -> Result<(), ValidationError> {
        self.name = validate_author_name(name.as_ref())?;
        Ok(())
    }

    /// Assigns or clears the phone number after format validation.
    pub fn set_phone_number(&mut self, phone_number: Option<String>) -> Result<(), ValidationError> {
        validate_optional_phone_number(phone_number.as_deref())?;
        self.phone_number = phone_number;
        Ok(())
    }

    /// Applies every field of `patch`, all or nothing.
    ///
    /// On error `self` is left unchanged.
    pub fn apply_patch(&mut self, patch: &AuthorPatch) -> Result<(), ValidationError> {
        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.set_name(name)?;
        }
        if let Some(phone_number) = &patch.phone_number {
            next.set_phone_number(phone_number.clone())?;
        }
        *self = next;
        Ok(())
    }

    /// Re-runs all format validators over the current field values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if validate_author_name(&self.name)? != self.name {
            return Err(ValidationError::MissingAuthorName);
        }
        validate_optional_phone_number(self.phone_number.as_deref())
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Author(id={}, name={})", self.id, self.name)
    }
}
