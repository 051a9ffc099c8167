//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: flat JSON files read through `cap-std`
//! - **token**: bearer token verification with `jsonwebtoken`
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod persistence;
pub mod token;
