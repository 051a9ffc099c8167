//! User data model.
//!
//! [`UserRecord`] mirrors one entry of the persisted users collection,
//! password hash included. [`UserView`] is the only shape handed to clients;
//! it has no password field, so the projection cannot leak one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer identifier of a stored user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Access role attached to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrators manage attendance and leave for everyone.
    Admin,
    /// Employees track their own attendance.
    Employee,
}

/// Opaque password hash as stored on disk.
///
/// Never rendered by `Debug` and never serialised back out.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an already-hashed password.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `id` is unique across the stored collection. Lookups still resolve
///   duplicates deterministically (first in file order).
///
/// # Examples
/// ```
/// use attendance::domain::{Role, UserRecord};
///
/// let record: UserRecord = serde_json::from_str(
///     r#"{"id":2,"name":"John Doe","email":"emp@example.com",
///         "password":"hash","role":"employee","department":"Engineering"}"#,
/// )
/// .expect("valid record");
/// assert_eq!(record.role(), Role::Employee);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    id: UserId,
    name: String,
    email: String,
    password: PasswordHash,
    role: Role,
    department: String,
}

/// Owned field bundle used to build a [`UserRecord`] in code.
#[derive(Debug, Clone)]
pub struct UserRecordParts {
    /// Stable identifier.
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Stored password hash.
    pub password: PasswordHash,
    /// Access role.
    pub role: Role,
    /// Department label.
    pub department: String,
}

impl From<UserRecordParts> for UserRecord {
    fn from(parts: UserRecordParts) -> Self {
        let UserRecordParts {
            id,
            name,
            email,
            password,
            role,
            department,
        } = parts;
        Self {
            id,
            name,
            email,
            password,
            role,
            department,
        }
    }
}

impl UserRecord {
    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Access role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Department label.
    pub fn department(&self) -> &str {
        self.department.as_str()
    }

    /// Project the record into its client-safe view.
    pub fn to_view(&self) -> UserView {
        UserView {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            department: self.department.clone(),
        }
    }
}

impl From<UserRecord> for UserView {
    fn from(record: UserRecord) -> Self {
        let UserRecord {
            id,
            name,
            email,
            password: _,
            role,
            department,
        } = record;
        Self {
            id,
            name,
            email,
            role,
            department,
        }
    }
}

/// Public user view returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserView {
    /// Stable identifier.
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Access role.
    pub role: Role,
    /// Department label.
    pub department: String,
}
