//! [`UserRepository`] adapter over the users JSON store file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{TraceId, UserRecord};

use super::json_store::{self, JsonStoreError};

/// Reads `users.json` on every call, off the async worker.
#[derive(Debug, Clone)]
pub struct JsonUserRepository {
    path: Arc<PathBuf>,
}

impl JsonUserRepository {
    /// Serve records from the JSON array at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

fn map_store_error(err: JsonStoreError) -> UserRepositoryError {
    match err {
        JsonStoreError::Read { .. } => UserRepositoryError::read(err.to_string()),
        JsonStoreError::Parse { .. } => UserRepositoryError::decode(err.to_string()),
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn load_all(&self) -> Result<Vec<UserRecord>, UserRepositoryError> {
        let path = Arc::clone(&self.path);
        let trace_id = TraceId::current();
        let task = tokio::task::spawn_blocking(move || match trace_id {
            Some(id) => TraceId::sync_scope(id, || json_store::load::<UserRecord>(&path)),
            None => json_store::load::<UserRecord>(&path),
        });
        match task.await {
            Ok(result) => result.map_err(map_store_error),
            Err(join_err) => Err(UserRepositoryError::read(format!(
                "store read task failed: {join_err}"
            ))),
        }
    }
}
