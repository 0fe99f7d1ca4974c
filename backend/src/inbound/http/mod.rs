//! HTTP inbound adapter exposing the user REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// The `/api` scope with JSON and path extractor errors rendered through the
/// domain error envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .configure(users::configure)
}
