//! Seed user records.
//!
//! These mirror the backend's stored user shape without depending on the
//! backend crate.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Plain-text password given to every seeded account.
pub const DEFAULT_PASSWORD: &str = "password";

/// Access role written for a seed user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleSeed {
    /// Administrative staff.
    Admin,
    /// Regular employee.
    Employee,
}

/// A user record as written to `users.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSeed {
    /// Unique identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Hex SHA-256 digest of the plain-text password.
    pub password: String,
    /// Access role.
    pub role: RoleSeed,
    /// Department name.
    pub department: String,
}

impl UserSeed {
    fn with_default_password(
        id: i64,
        name: &str,
        email: &str,
        role: RoleSeed,
        department: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            password: hash_password(DEFAULT_PASSWORD),
            role,
            department: department.to_owned(),
        }
    }
}

/// Hex-encoded SHA-256 digest of `plain`.
///
/// # Example
///
/// ```
/// use seed_data::hash_password;
///
/// assert_eq!(
///     hash_password("password"),
///     "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
/// );
/// ```
#[must_use]
pub fn hash_password(plain: &str) -> String {
    hex::encode(Sha256::digest(plain.as_bytes()))
}

/// The initial accounts: one administrator and two employees.
#[must_use]
pub fn default_users() -> Vec<UserSeed> {
    vec![
        UserSeed::with_default_password(
            1,
            "Admin User",
            "admin@example.com",
            RoleSeed::Admin,
            "Management",
        ),
        UserSeed::with_default_password(
            2,
            "John Doe",
            "emp@example.com",
            RoleSeed::Employee,
            "Engineering",
        ),
        UserSeed::with_default_password(
            3,
            "Jane Smith",
            "jane@example.com",
            RoleSeed::Employee,
            "HR",
        ),
    ]
}
