//! User service library.
//!
//! A CRUD HTTP service for a single `User` resource, laid out as a hexagon:
//! [`domain`] holds the record, ports, and services; [`inbound`] exposes
//! them over actix-web; [`outbound`] stores them in PostgreSQL or memory.

pub mod dev_seed;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
