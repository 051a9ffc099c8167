//! Driven port for reading the stored user collection.
//!
//! The collection is small and read-only from the service's perspective, so
//! adapters materialise it whole on every call instead of offering lookups.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::UserRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The backing collection could not be read.
        Read { message: String } => "user repository read failed: {message}",
        /// The backing collection was read but is not a valid user list.
        Decode { message: String } => "user repository decode failed: {message}",
    }
}

/// Port for loading every stored user record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Load all records in storage order.
    async fn load_all(&self) -> Result<Vec<UserRecord>, UserRepositoryError>;
}

/// In-memory repository for tests and fixtures.
///
/// # Examples
/// ```
/// use attendance::domain::ports::{InMemoryUserRepository, UserRepository};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repository = InMemoryUserRepository::default();
/// assert!(repository.load_all().await.unwrap().is_empty());
/// # });
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    records: Arc<[UserRecord]>,
}

impl InMemoryUserRepository {
    /// Serve the given records in order.
    pub fn new(records: impl Into<Vec<UserRecord>>) -> Self {
        let records: Vec<UserRecord> = records.into();
        Self {
            records: records.into(),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn load_all(&self) -> Result<Vec<UserRecord>, UserRepositoryError> {
        Ok(self.records.to_vec())
    }
}
