//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for creating, replacing, and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a new user and return it with its generated identity.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace name and email of an existing user.
    ///
    /// Returns `None` when `id` does not exist. Identity and creation time
    /// are preserved.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<Option<User>, Error>;

    /// Delete the user with `id`. Deleting an absent id succeeds.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
