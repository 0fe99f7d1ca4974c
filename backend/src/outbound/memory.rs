//! In-memory `UserRepository` adapter.
//!
//! Backs the server when no database URL is configured and drives the HTTP
//! integration tests. Identity allocation and email uniqueness mirror the
//! PostgreSQL table: a `BIGSERIAL`-style counter that never reuses ids, and a
//! unique constraint on `email`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, User, UserId};

#[derive(Debug, Default)]
struct Store {
    rows: BTreeMap<i64, User>,
    last_id: i64,
}

impl Store {
    fn email_taken_by_other(&self, email: &EmailAddress, id: Option<UserId>) -> bool {
        self.rows
            .values()
            .any(|row| row.email() == email && row.id() != id)
    }
}

/// Mutex-guarded user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.get(&id.value()).cloned())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .lock()?
            .rows
            .values()
            .find(|row| row.email() == email)
            .cloned())
    }

    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        if store.email_taken_by_other(user.email(), user.id()) {
            return Err(UserPersistenceError::duplicate_email(user.email().as_ref()));
        }

        let saved = match user.id() {
            None => {
                store.last_id += 1;
                user.clone().with_id(UserId::new(store.last_id))
            }
            Some(id) => {
                let existing = store
                    .rows
                    .get(&id.value())
                    .ok_or_else(|| UserPersistenceError::query("record not found"))?;
                User::persisted(
                    id,
                    user.name().clone(),
                    user.email().clone(),
                    existing.created_at(),
                )
            }
        };

        if let Some(id) = saved.id() {
            store.rows.insert(id.value(), saved.clone());
        }
        Ok(saved)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError> {
        self.lock()?.rows.remove(&id.value());
        Ok(())
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.rows.contains_key(&id.value()))
    }

    async fn count(&self) -> Result<i64, UserPersistenceError> {
        let len = self.lock()?.rows.len();
        i64::try_from(len).map_err(|_| UserPersistenceError::query("row count overflow"))
    }
}
