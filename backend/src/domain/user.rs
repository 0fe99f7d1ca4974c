//! User data model.
//!
//! A [`User`] is a plain record whose identity is optional: `None` until the
//! persistence gateway assigns one on insert. Field newtypes enforce the
//! column constraints (non-empty, bounded length) before anything reaches
//! storage.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum length, in characters, accepted for a user name.
pub const USER_NAME_MAX: usize = 255;
/// Maximum length, in characters, accepted for an email address.
pub const EMAIL_MAX: usize = 255;

/// Validation errors raised by the user field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Name is empty once surrounding whitespace is removed.
    EmptyName,
    /// Name exceeds `max` characters.
    NameTooLong { max: usize },
    /// Email is empty once surrounding whitespace is removed.
    EmptyEmail,
    /// Email exceeds `max` characters.
    EmailTooLong { max: usize },
}

impl UserValidationError {
    /// Request field the error refers to, using the JSON field name.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong { .. } => "name",
            Self::EmptyEmail | Self::EmailTooLong { .. } => "email",
        }
    }

    /// Stable machine-readable code for adapters.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::NameTooLong { .. } => "name_too_long",
            Self::EmptyEmail => "empty_email",
            Self::EmailTooLong { .. } => "email_too_long",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmailTooLong { max } => write!(f, "email must be at most {max} characters"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Server-assigned user identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identity value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identity value as stored.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn check_text(
    value: &str,
    max: usize,
    empty: UserValidationError,
    too_long: UserValidationError,
) -> Result<(), UserValidationError> {
    if value.trim().is_empty() {
        return Err(empty);
    }
    if value.chars().count() > max {
        return Err(too_long);
    }
    Ok(())
}

/// Full name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        check_text(
            &name,
            USER_NAME_MAX,
            UserValidationError::EmptyName,
            UserValidationError::NameTooLong { max: USER_NAME_MAX },
        )?;
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Email address, unique across all users at the storage layer.
///
/// Only presence and length are checked here; uniqueness is left to the
/// storage constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        check_text(
            &email,
            EMAIL_MAX,
            UserValidationError::EmptyEmail,
            UserValidationError::EmailTooLong { max: EMAIL_MAX },
        )?;
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` is `None` until the record has been persisted and never changes
///   afterwards.
/// - `created_at` is fixed at insertion; updates carry the stored value over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: Option<UserId>,
    name: UserName,
    email: EmailAddress,
    created_at: DateTime<Utc>,
}

impl User {
    /// Build a record that has not been persisted yet.
    pub fn unsaved(name: UserName, email: EmailAddress, created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name,
            email,
            created_at,
        }
    }

    /// Rebuild a record that already has a storage identity.
    pub fn persisted(
        id: UserId,
        name: UserName,
        email: EmailAddress,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            email,
            created_at,
        }
    }

    /// Storage identity, if assigned.
    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Full name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Return a copy carrying the given storage identity.
    #[must_use]
    pub fn with_id(self, id: UserId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// Candidate values for creating or replacing a user.
///
/// There is no identity field: clients cannot choose or change an id.
/// `created_at` is honoured on create only (the seeder back-dates its rows);
/// updates always keep the stored timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Full name.
    pub name: UserName,
    /// Email address.
    pub email: EmailAddress,
    /// Creation time to store on insert; the service clock is used when unset.
    pub created_at: Option<DateTime<Utc>>,
}

impl UserDraft {
    /// Build a draft from validated fields.
    pub fn new(name: UserName, email: EmailAddress) -> Self {
        Self {
            name,
            email,
            created_at: None,
        }
    }

    /// Fallible constructor validating raw strings.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::{UserDraft, UserValidationError};
    ///
    /// let draft = UserDraft::try_from_strings("John Doe", "john@example.com")
    ///     .expect("valid draft");
    /// assert_eq!(draft.email.as_ref(), "john@example.com");
    ///
    /// let err = UserDraft::try_from_strings("  ", "john@example.com").unwrap_err();
    /// assert_eq!(err, UserValidationError::EmptyName);
    /// ```
    pub fn try_from_strings(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserName::new(name)?, EmailAddress::new(email)?))
    }

    /// Pin the creation timestamp used when the draft is inserted.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
