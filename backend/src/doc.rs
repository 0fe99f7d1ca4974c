//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects the user and health handlers plus the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds and the `openapi-dump` binary prints it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::UserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        version = "1.0.0",
        description = "CRUD service for users backed by PostgreSQL",
        contact(name = "Example Team", email = "demo@example.com")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorSchema, ErrorCodeSchema, UserRequest)),
    tags(
        (name = "users", description = "User management API"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
