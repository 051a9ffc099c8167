//! Domain primitives, services, and ports.
//!
//! Purpose: Define strongly typed attendance entities used by the API and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - UserRecord / UserView — persisted user and its public projection.
//! - Principal / BearerToken — authentication primitives.
//! - UsersService — list and lookup use-cases over the user repository.

pub mod auth;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod users_service;

pub use self::auth::{AuthError, BearerToken, Principal};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{PasswordHash, Role, UserId, UserRecord, UserRecordParts, UserView};
pub use self::users_service::UsersService;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
