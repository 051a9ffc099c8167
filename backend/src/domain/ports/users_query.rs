//! Driving port for user-facing queries.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch user-visible data
//! without importing outbound persistence concerns. Production backs it with
//! [`crate::domain::UsersService`]; tests can substitute a mock.

use async_trait::async_trait;

use crate::domain::{Error, Principal, UserId, UserView};

/// Domain use-case port for listing and fetching users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user as a public view, in storage order.
    async fn list_users(&self, principal: &Principal) -> Result<Vec<UserView>, Error>;

    /// Return the first stored user whose id matches.
    async fn get_user(&self, principal: &Principal, id: UserId) -> Result<UserView, Error>;
}
