//! Initial JSON data files for the attendance backend.
//!
//! The backend reads its users from a JSON array on disk. This crate writes
//! that array, together with empty attendance and leave collections, into a
//! data directory the first time it is prepared. It is deliberately
//! independent of the backend crate's domain types.
//!
//! # Example
//!
//! ```
//! use seed_data::{default_users, initialise};
//!
//! let tmp = tempfile::tempdir().expect("tempdir");
//! let outcome = initialise(tmp.path()).expect("initialise");
//!
//! assert_eq!(outcome.created.len(), 3);
//! assert_eq!(default_users().len(), 3);
//! ```

mod atomic_io;
mod error;
mod init;
mod seed;
pub mod seed_cli;

pub use error::SeedError;
pub use init::{ATTENDANCE_FILE, InitOutcome, LEAVES_FILE, USERS_FILE, initialise};
pub use seed::{DEFAULT_PASSWORD, RoleSeed, UserSeed, default_users, hash_password};
