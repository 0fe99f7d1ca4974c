//! Driving port for user reads.
//!
//! Inbound adapters use this port to fetch users without importing outbound
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every stored user in identity order.
    async fn get_all_users(&self) -> Result<Vec<User>, Error>;

    /// A single user; `None` when no user has `id`.
    async fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, Error>;
}
