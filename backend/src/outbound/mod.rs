//! Outbound adapters implementing the domain persistence port.
//!
//! - **persistence**: PostgreSQL gateway using Diesel ORM.
//! - **memory**: in-process gateway for database-less runs and tests.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
