//! Development data seeding.
//!
//! Populates an empty store with a fixed set of sample users so the API has
//! something to show in local environments. Seeding is idempotent: a sentinel
//! user marks a store as seeded, and each sample is only written when its
//! email is not already taken.

use std::sync::Arc;

use chrono::TimeDelta;
use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, User, UserName, UserValidationError};

/// Email of the sample user whose presence marks the store as seeded.
pub const SENTINEL_EMAIL: &str = "john.doe@test.com";

/// Sample users as `(name, email, days before now)`.
pub const SAMPLE_USERS: [(&str, &str, i64); 10] = [
    ("John Doe", "john.doe@test.com", 30),
    ("Jane Smith", "jane.smith@test.com", 25),
    ("Bob Johnson", "bob.johnson@test.com", 20),
    ("Alice Williams", "alice.williams@test.com", 15),
    ("Charlie Brown", "charlie.brown@test.com", 10),
    ("Diana Prince", "diana.prince@test.com", 5),
    ("Ethan Hunt", "ethan.hunt@test.com", 3),
    ("Fiona Gallagher", "fiona.gallagher@test.com", 2),
    ("George Miller", "george.miller@test.com", 1),
    ("Hannah Montana", "hannah.montana@test.com", 0),
];

/// Whether the seeder wrote anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevSeedResult {
    /// Samples were written; `created` counts the new rows.
    Applied { created: usize },
    /// The sentinel user already existed; nothing was written.
    AlreadySeeded,
}

/// Result of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevSeedOutcome {
    /// What the run did.
    pub result: DevSeedResult,
    /// Users stored once the run finished.
    pub total_users: i64,
}

/// Errors raised while seeding development data.
#[derive(Debug, Error)]
pub enum DevSeedError {
    /// A sample user failed field validation.
    #[error("sample user failed validation: {0}")]
    Validation(#[from] UserValidationError),
    /// The gateway rejected a read or write.
    #[error("dev seed persistence error: {0}")]
    Persistence(#[from] UserPersistenceError),
}

/// Writes the sample users through a [`UserRepository`].
#[derive(Clone)]
pub struct DevDataSeeder<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> DevDataSeeder<R> {
    /// Create a seeder; sample timestamps are relative to `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

impl<R> DevDataSeeder<R>
where
    R: UserRepository,
{
    /// Seed the store unless the sentinel user is already present.
    ///
    /// # Errors
    ///
    /// Returns [`DevSeedError`] when a sample is invalid or the gateway fails.
    pub async fn seed(&self) -> Result<DevSeedOutcome, DevSeedError> {
        let sentinel = EmailAddress::new(SENTINEL_EMAIL)?;
        if self.repository.find_by_email(&sentinel).await?.is_some() {
            info!(sentinel = SENTINEL_EMAIL, "dev data already seeded; skipping");
            return Ok(DevSeedOutcome {
                result: DevSeedResult::AlreadySeeded,
                total_users: self.repository.count().await?,
            });
        }

        let now = self.clock.utc();
        let mut created = 0;
        for (name, email, days_ago) in SAMPLE_USERS {
            let email = EmailAddress::new(email)?;
            if self.repository.find_by_email(&email).await?.is_some() {
                continue;
            }
            let candidate = User::unsaved(
                UserName::new(name)?,
                email,
                now - TimeDelta::days(days_ago),
            );
            let saved = self.repository.save(&candidate).await?;
            info!(
                user_id = ?saved.id(),
                name = %saved.name(),
                email = %saved.email(),
                "dev user created"
            );
            created += 1;
        }

        let total_users = self.repository.count().await?;
        info!(created, total_users, "dev data seeding complete");
        Ok(DevSeedOutcome {
            result: DevSeedResult::Applied { created },
            total_users,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for development seeding.

    use chrono::{DateTime, TimeZone, Utc};
    use mockall::predicate::function;
    use rstest::rstest;

    use super::*;
    use crate::domain::UserId;
    use crate::domain::ports::MockUserRepository;
    use crate::test_support::FixedClock;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 22, 21, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn seeder(repo: MockUserRepository) -> DevDataSeeder<MockUserRepository> {
        DevDataSeeder::new(Arc::new(repo), Arc::new(FixedClock::new(now())))
    }

    #[rstest]
    fn sample_emails_follow_first_dot_last() {
        for (name, email, _) in SAMPLE_USERS {
            let expected = format!("{}@test.com", name.to_lowercase().replace(' ', "."));
            assert_eq!(email, expected);
        }
    }

    #[rstest]
    #[tokio::test]
    async fn skips_when_sentinel_exists() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .with(function(|email: &EmailAddress| email.as_ref() == SENTINEL_EMAIL))
            .times(1)
            .return_once(|email| {
                Ok(Some(User::persisted(
                    UserId::new(1),
                    UserName::new("John Doe").expect("valid name"),
                    email.clone(),
                    now(),
                )))
            });
        repo.expect_save().times(0);
        repo.expect_count().times(1).return_once(|| Ok(10));

        let outcome = seeder(repo).seed().await.expect("seed succeeds");

        assert_eq!(outcome.result, DevSeedResult::AlreadySeeded);
        assert_eq!(outcome.total_users, 10);
    }

    #[rstest]
    #[tokio::test]
    async fn creates_missing_samples_with_backdated_timestamps() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| {
                if email.as_ref() == "jane.smith@test.com" {
                    Ok(Some(User::persisted(
                        UserId::new(1),
                        UserName::new("Jane Smith").expect("valid name"),
                        email.clone(),
                        now(),
                    )))
                } else {
                    Ok(None)
                }
            });
        repo.expect_save()
            .withf(|user| {
                user.email().as_ref() != "john.doe@test.com"
                    || user.created_at() == now() - TimeDelta::days(30)
            })
            .times(9)
            .returning(|user| Ok(user.clone().with_id(UserId::new(2))));
        repo.expect_count().times(1).return_once(|| Ok(10));

        let outcome = seeder(repo).seed().await.expect("seed succeeds");

        assert_eq!(outcome.result, DevSeedResult::Applied { created: 9 });
        assert_eq!(outcome.total_users, 10);
    }

    #[rstest]
    #[tokio::test]
    async fn surfaces_persistence_failures() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .return_once(|_| Err(UserPersistenceError::connection("refused")));

        let error = seeder(repo).seed().await.expect_err("seed fails");

        assert!(matches!(error, DevSeedError::Persistence(_)));
    }
}
