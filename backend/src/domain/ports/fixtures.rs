//! Shared record fixtures for port and service tests.

use crate::domain::{PasswordHash, Role, UserId, UserRecord, UserRecordParts};

/// SHA-256 of `"password"`, matching what the seed writes.
pub(crate) const PASSWORD_HASH: &str =
    "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

pub(crate) fn record(id: i64, name: &str, email: &str, role: Role, department: &str) -> UserRecord {
    UserRecord::from(UserRecordParts {
        id: UserId::new(id),
        name: name.to_owned(),
        email: email.to_owned(),
        password: PasswordHash::new(PASSWORD_HASH),
        role,
        department: department.to_owned(),
    })
}

/// The three users written by the seed: one admin and two employees.
pub(crate) fn seeded_records() -> Vec<UserRecord> {
    vec![
        record(1, "Admin User", "admin@example.com", Role::Admin, "Management"),
        record(2, "John Doe", "emp@example.com", Role::Employee, "Engineering"),
        record(3, "Jane Smith", "jane@example.com", Role::Employee, "HR"),
    ]
}
