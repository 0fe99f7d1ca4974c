//! Development seeding settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Controls the development seeder at startup.
///
/// Reads `DEV_SEED_ENABLED` from the environment or `enabled` from a config
/// file. The server binary keeps command-line flags for its own settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DEV_SEED")]
pub struct DevSeedSettings {
    /// Seed sample users on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
}

impl DevSeedSettings {
    /// Whether seeding should run.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
