//! Startup seeding of the JSON data directory.

use std::path::PathBuf;

use seed_data::{InitOutcome, SeedError, initialise};
use thiserror::Error;
use tracing::info;

use crate::server::AppConfig;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Writing the initial data files failed.
    #[error("failed to seed {path}: {source}")]
    Seed {
        /// Data directory being initialised.
        path: PathBuf,
        /// Underlying seeding error.
        #[source]
        source: SeedError,
    },
    /// The blocking seeding task did not complete.
    #[error("seeding task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Initialise the data directory when startup seeding is enabled.
///
/// Returns `None` when seeding is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use attendance::seeding::seed_on_startup;
/// use attendance::server::AppConfig;
///
/// # async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
/// if let Some(outcome) = seed_on_startup(&config).await? {
///     println!("created {:?}", outcome.created);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn seed_on_startup(
    config: &AppConfig,
) -> Result<Option<InitOutcome>, StartupSeedingError> {
    if !config.seed_on_startup() {
        info!(reason = "disabled", "data seeding skipped");
        return Ok(None);
    }

    let data_dir = config.data_dir();
    let target = data_dir.clone();
    let outcome = tokio::task::spawn_blocking(move || initialise(&target))
        .await?
        .map_err(|source| StartupSeedingError::Seed {
            path: data_dir.clone(),
            source,
        })?;

    if outcome.is_noop() {
        info!(
            data_dir = %data_dir.display(),
            "data files already present; skipping"
        );
    } else {
        info!(
            data_dir = %data_dir.display(),
            created = ?outcome.created,
            existing = ?outcome.existing,
            "data seeding applied"
        );
    }
    Ok(Some(outcome))
}
