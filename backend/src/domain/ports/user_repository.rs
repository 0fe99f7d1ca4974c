//! Persistence gateway port for user records.
//!
//! Adapters own identity generation and the email uniqueness constraint; the
//! domain never pre-checks either.

use async_trait::async_trait;

use crate::domain::{EmailAddress, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The email uniqueness constraint rejected the write.
        DuplicateEmail { email: String } => "email already registered: {email}",
    }
}

/// CRUD gateway over the users table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user ordered by identity.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identity.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by email address.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Insert `user` when it has no identity, otherwise update it in place.
    ///
    /// Updates never touch the stored creation timestamp. Updating an
    /// identity with no matching row fails with a query error.
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError>;

    /// Remove the user with `id`; absent ids are ignored.
    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError>;

    /// Whether a user with `id` exists.
    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Number of stored users.
    async fn count(&self) -> Result<i64, UserPersistenceError>;
}
