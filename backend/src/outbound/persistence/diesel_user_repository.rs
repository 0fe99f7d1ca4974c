//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Each call checks out its own pooled connection and runs a single
//! autocommit statement. Email uniqueness is left to the `users_email_key`
//! constraint; violations surface as [`UserPersistenceError::DuplicateEmail`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, User, UserId, UserName};

use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user persistence gateway.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    UserPersistenceError::connection(message)
}

/// Map Diesel errors; `email` names the value written when the statement
/// could trip the uniqueness constraint.
fn map_diesel_error(error: DieselError, email: Option<&EmailAddress>) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(kind, _) => match (kind, email) {
            (DatabaseErrorKind::UniqueViolation, Some(email)) => {
                UserPersistenceError::duplicate_email(email.as_ref())
            }
            (DatabaseErrorKind::ClosedConnection, _) => {
                UserPersistenceError::connection("database connection error")
            }
            _ => UserPersistenceError::query("database error"),
        },
        _ => UserPersistenceError::query("database error"),
    }
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        id,
        name,
        email,
        created_at,
    } = row;
    let name = UserName::new(name)
        .map_err(|err| UserPersistenceError::query(format!("invalid stored name: {err}")))?;
    let email = EmailAddress::new(email)
        .map_err(|err| UserPersistenceError::query(format!("invalid stored email: {err}")))?;
    Ok(User::persisted(UserId::new(id), name, email, created_at))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .find(id.value())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;

        row.map(row_to_user).transpose()
    }

    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: UserRow = match user.id() {
            None => {
                let new_row = NewUserRow {
                    name: user.name().as_ref(),
                    email: user.email().as_ref(),
                    created_at: user.created_at(),
                };
                diesel::insert_into(users::table)
                    .values(&new_row)
                    .returning(UserRow::as_returning())
                    .get_result(&mut conn)
                    .await
            }
            Some(id) => {
                let changeset = UserChangeset {
                    name: user.name().as_ref(),
                    email: user.email().as_ref(),
                };
                diesel::update(users::table.find(id.value()))
                    .set(&changeset)
                    .returning(UserRow::as_returning())
                    .get_result(&mut conn)
                    .await
            }
        }
        .map_err(|err| map_diesel_error(err, Some(user.email())))?;

        row_to_user(row)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(users::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        Ok(())
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(users::table.find(id.value())))
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))
    }

    async fn count(&self) -> Result<i64, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        users::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))
    }
}
