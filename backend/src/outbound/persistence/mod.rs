//! PostgreSQL persistence adapters.
//!
//! Diesel row types and the table schema stay private to this module; the
//! rest of the crate sees only [`DieselUserRepository`], the pool, and the
//! migration runner.

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, apply_migrations, run_migrations};
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
