//! Users read service.
//!
//! Loads the whole user collection through [`UserRepository`] on every call,
//! then projects records into [`UserView`]s. Repository failures surface as
//! redacted internal errors; the detail is logged here.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersQuery};
use crate::domain::{Error, Principal, UserId, UserRecord, UserView};

/// Message returned when no record matches a lookup.
pub const USER_NOT_FOUND: &str = "User not found";

/// [`UsersQuery`] implementation backed by a [`UserRepository`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use attendance::domain::{Principal, UserId, UsersService};
/// use attendance::domain::ports::{InMemoryUserRepository, UsersQuery};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let service = UsersService::new(Arc::new(InMemoryUserRepository::default()));
/// let principal = Principal::default();
/// assert!(service.list_users(&principal).await.unwrap().is_empty());
/// assert!(service.get_user(&principal, UserId::new(1)).await.is_err());
/// # });
/// ```
#[derive(Clone)]
pub struct UsersService {
    repository: Arc<dyn UserRepository>,
}

impl UsersService {
    /// Build the service over a repository.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    async fn load(&self) -> Result<Vec<UserRecord>, Error> {
        self.repository.load_all().await.map_err(map_repository_error)
    }
}

fn map_repository_error(err: UserRepositoryError) -> Error {
    error!(error = %err, "failed to load user records");
    Error::internal(err.to_string())
}

#[async_trait]
impl UsersQuery for UsersService {
    async fn list_users(&self, principal: &Principal) -> Result<Vec<UserView>, Error> {
        let records = self.load().await?;
        debug!(
            subject = principal.subject().as_deref(),
            count = records.len(),
            "listing users"
        );
        Ok(records.into_iter().map(UserView::from).collect())
    }

    async fn get_user(&self, principal: &Principal, id: UserId) -> Result<UserView, Error> {
        let records = self.load().await?;
        debug!(
            subject = principal.subject().as_deref(),
            user_id = %id,
            "fetching user"
        );
        records
            .into_iter()
            .find(|record| record.id() == id)
            .map(UserView::from)
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}
