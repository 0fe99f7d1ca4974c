//! Startup wiring for development data seeding.

mod config;
mod startup;

pub use config::DevSeedSettings;
pub use startup::seed_dev_data_on_startup;
