//! Attendance backend library.
//!
//! Read-only access to the employee directory of the attendance system:
//!
//! - [`domain`]: user records, the public projection, the users service,
//!   and the ports it depends on.
//! - [`inbound::http`]: Actix handlers and the bearer authentication guard.
//! - [`outbound`]: the JSON file store and HS256 token verification.
//! - [`server`] and [`seeding`]: configuration and process wiring.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
