//! Data directory initialisation.

use std::io;
use std::path::Path;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;

use crate::atomic_io::write_atomic;
use crate::error::SeedError;
use crate::seed::default_users;

/// File holding the user collection.
pub const USERS_FILE: &str = "users.json";
/// File holding attendance entries.
pub const ATTENDANCE_FILE: &str = "attendance.json";
/// File holding leave requests.
pub const LEAVES_FILE: &str = "leaves.json";

/// Which data files [`initialise`] wrote and which it left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOutcome {
    /// Files written because they were absent.
    pub created: Vec<&'static str>,
    /// Files that already existed and were not touched.
    pub existing: Vec<&'static str>,
}

impl InitOutcome {
    /// Whether every file was already present.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

/// Create `data_dir` and any missing data file with its initial content.
///
/// Existing files are never overwritten, so repeated calls are harmless.
///
/// # Errors
///
/// Returns [`SeedError`] when the directory cannot be prepared, a file cannot
/// be inspected, or a write fails.
///
/// # Example
///
/// ```
/// use seed_data::{USERS_FILE, initialise};
///
/// let tmp = tempfile::tempdir().expect("tempdir");
/// let data_dir = tmp.path().join("data");
///
/// let first = initialise(&data_dir).expect("initialise");
/// assert!(first.created.contains(&USERS_FILE));
///
/// let second = initialise(&data_dir).expect("initialise again");
/// assert!(second.is_noop());
/// ```
pub fn initialise(data_dir: impl AsRef<Path>) -> Result<InitOutcome, SeedError> {
    let data_dir = data_dir.as_ref();
    let dir = open_data_dir(data_dir)?;
    let users = serde_json::to_string_pretty(&default_users()).map_err(|err| {
        SeedError::Encode {
            message: err.to_string(),
        }
    })?;

    let mut outcome = InitOutcome::default();
    for (name, contents) in [
        (USERS_FILE, users.as_str()),
        (ATTENDANCE_FILE, "[]"),
        (LEAVES_FILE, "[]"),
    ] {
        if exists(&dir, data_dir, name)? {
            outcome.existing.push(name);
        } else {
            write_atomic(&dir, Utf8Path::new(name), contents).map_err(|err| match err {
                SeedError::Write { message, .. } => SeedError::Write {
                    path: data_dir.join(name),
                    message,
                },
                other => other,
            })?;
            outcome.created.push(name);
        }
    }
    Ok(outcome)
}

fn open_data_dir(data_dir: &Path) -> Result<Dir, SeedError> {
    let prepare_error = |err: io::Error| SeedError::DataDir {
        path: data_dir.to_path_buf(),
        message: err.to_string(),
    };
    Dir::create_ambient_dir_all(data_dir, ambient_authority()).map_err(prepare_error)?;
    Dir::open_ambient_dir(data_dir, ambient_authority()).map_err(prepare_error)
}

fn exists(dir: &Dir, data_dir: &Path, name: &str) -> Result<bool, SeedError> {
    match dir.symlink_metadata(name) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(SeedError::Probe {
            path: data_dir.join(name),
            message: err.to_string(),
        }),
    }
}
