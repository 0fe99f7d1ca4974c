//! Startup hook running the development seeder.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::info;

use crate::dev_seed::config::DevSeedSettings;
use crate::domain::ports::UserRepository;
use crate::domain::{DevDataSeeder, DevSeedError, DevSeedOutcome, DevSeedResult};

/// Seed sample users when enabled.
///
/// Returns `Ok(None)` when seeding is disabled.
///
/// # Errors
///
/// Returns [`DevSeedError`] when the seeder fails to read or write users.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use user_service::dev_seed::{DevSeedSettings, seed_dev_data_on_startup};
/// use user_service::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let settings = DevSeedSettings { enabled: false };
/// let repository = Arc::new(InMemoryUserRepository::new());
/// let outcome = seed_dev_data_on_startup(&settings, repository).await.unwrap();
/// assert!(outcome.is_none());
/// # });
/// ```
pub async fn seed_dev_data_on_startup<R>(
    settings: &DevSeedSettings,
    repository: Arc<R>,
) -> Result<Option<DevSeedOutcome>, DevSeedError>
where
    R: UserRepository,
{
    if !settings.is_enabled() {
        info!(reason = "disabled", "dev data seeding skipped");
        return Ok(None);
    }

    let seeder = DevDataSeeder::new(repository, Arc::new(DefaultClock));
    let outcome = seeder.seed().await?;

    match outcome.result {
        DevSeedResult::Applied { created } => {
            info!(created, total_users = outcome.total_users, "dev data seeding applied");
        }
        DevSeedResult::AlreadySeeded => {
            info!(
                total_users = outcome.total_users,
                "dev data already present; skipping"
            );
        }
    }

    Ok(Some(outcome))
}
