//! Service entry-point: loads settings, prepares storage, and serves the API.

mod server;

use std::ffi::OsString;
use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, build_http_state, create_server};
use user_service::dev_seed::DevSeedSettings;
use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{DbPool, PoolConfig, run_migrations};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

async fn build_server_config(settings: &ServerSettings) -> io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr());
    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };

    run_migrations(database_url.to_owned())
        .await
        .map_err(io::Error::other)?;
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(io::Error::other)?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let settings = ServerSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load server settings: {err}")))?;
    // Command-line flags belong to the server settings; seeding reads only
    // its environment variables and config file.
    let program = std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("user-service"));
    let seed_settings = DevSeedSettings::load_from_iter([program])
        .map_err(|err| io::Error::other(format!("failed to load seed settings: {err}")))?;

    let config = build_server_config(&settings).await?;
    let health_state = web::Data::new(HealthState::new());
    let http_state = build_http_state(&config, &seed_settings).await?;

    create_server(health_state, http_state, config)?.await
}
