//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::io;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use user_service::Trace;
use user_service::dev_seed::{DevSeedSettings, seed_dev_data_on_startup};
#[cfg(debug_assertions)]
use user_service::doc::ApiDoc;
use user_service::domain::UserService;
use user_service::domain::ports::UserRepository;
use user_service::inbound::http::api_scope;
use user_service::inbound::http::health::{HealthState, live, ready};
use user_service::inbound::http::state::HttpState;
use user_service::outbound::memory::InMemoryUserRepository;
use user_service::outbound::persistence::DieselUserRepository;

async fn wire_user_ports<R>(repository: Arc<R>, seed: &DevSeedSettings) -> io::Result<HttpState>
where
    R: UserRepository + 'static,
{
    seed_dev_data_on_startup(seed, repository.clone())
        .await
        .map_err(|err| io::Error::other(format!("dev data seeding failed: {err}")))?;

    let service = Arc::new(UserService::new(repository, Arc::new(DefaultClock)));
    Ok(HttpState::new(service.clone(), service))
}

/// Pick the user store, run the optional seeder, and build handler state.
///
/// # Errors
///
/// Returns an I/O error when seeding fails.
pub async fn build_http_state(
    config: &ServerConfig,
    seed: &DevSeedSettings,
) -> io::Result<web::Data<HttpState>> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "user store selected");
            wire_user_ports(Arc::new(DieselUserRepository::new(pool.clone())), seed).await?
        }
        None => {
            warn!(store = "memory", "no database configured; users will not persist");
            wire_user_ports(Arc::new(InMemoryUserRepository::new()), seed).await?
        }
    };
    Ok(web::Data::new(state))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the HTTP server and mark the service ready.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: ServerConfig,
) -> io::Result<Server> {
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(config.bind_addr)?
        .run();

    info!(bind_addr = %config.bind_addr, "http server listening");
    health_state.mark_ready();
    Ok(server)
}
