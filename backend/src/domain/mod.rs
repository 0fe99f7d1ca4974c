//! Domain primitives, ports, and services.
//!
//! Purpose: define the user record and the use cases around it without any
//! knowledge of HTTP or SQL. Adapters in `inbound` and `outbound` depend on
//! this module, never the other way round.
//!
//! Public surface:
//! - `User`, `UserDraft` and the validated field types.
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `TraceId`: request-scoped correlation identifier.
//! - `UserService`: implementation of the user driving ports.
//! - `DevDataSeeder`: idempotent sample-data loader.

pub mod dev_seed;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::dev_seed::{DevDataSeeder, DevSeedError, DevSeedOutcome, DevSeedResult};
pub use self::error::{DomainError, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EMAIL_MAX, EmailAddress, USER_NAME_MAX, User, UserDraft, UserId, UserName,
    UserValidationError,
};
pub use self::user_service::UserService;

/// Domain error type used across ports and adapters.
pub type Error = DomainError;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use user_service::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("user 1 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
