//! User domain service.
//!
//! `UserService` implements both user driving ports on top of a
//! [`UserRepository`]. It adds no business rules beyond timestamping new
//! records and carrying identity and creation time across updates; the
//! gateway enforces email uniqueness.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId};

pub(crate) fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail { .. } => {
            Error::invalid_request("email is already registered")
                .with_details(json!({ "field": "email", "code": "duplicate_email" }))
        }
    }
}

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> UserService<R> {
    /// Create a service over `user_repo`, stamping new users with `clock`.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use user_service::domain::UserService;
    /// use user_service::outbound::memory::InMemoryUserRepository;
    ///
    /// let service = UserService::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(user_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn get_all_users(&self) -> Result<Vec<User>, Error> {
        self.user_repo
            .find_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, Error> {
        self.user_repo
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let UserDraft {
            name,
            email,
            created_at,
        } = draft;
        let created_at = created_at.unwrap_or_else(|| self.clock.utc());
        let candidate = User::unsaved(name, email, created_at);

        let saved = self
            .user_repo
            .save(&candidate)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = ?saved.id(), "user created");
        Ok(saved)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<Option<User>, Error> {
        let Some(existing) = self
            .user_repo
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
        else {
            return Ok(None);
        };

        let replacement = User::persisted(id, draft.name, draft.email, existing.created_at());
        let saved = self
            .user_repo
            .save(&replacement)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = %id, "user updated");
        Ok(Some(saved))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        self.user_repo
            .delete_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
