//! Flat-file JSON store.
//!
//! A store file holds one JSON array. [`load`] reads and parses the whole
//! file on each call; there is no cache, index, or write path. Reads go
//! through a `cap-std` directory handle scoped to the file's parent.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while loading a store file.
#[derive(Debug, Error)]
pub enum JsonStoreError {
    /// The file could not be opened or read.
    #[error("failed to read store at {path}: {source}")]
    Read {
        /// Path to the store file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a JSON array of the expected records.
    #[error("failed to parse store at {path}: {source}")]
    Parse {
        /// Path to the store file.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Read `path` and decode it as an ordered sequence of records.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use attendance::domain::UserRecord;
/// use attendance::outbound::persistence::json_store;
///
/// let users: Vec<UserRecord> = json_store::load(Path::new("data/users.json"))?;
/// # Ok::<(), json_store::JsonStoreError>(())
/// ```
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, JsonStoreError> {
    let payload = read_file(path).map_err(|source| JsonStoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&payload).map_err(|source| JsonStoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_file(path: &Path) -> std::io::Result<Vec<u8>> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "store path must name a file",
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read(Path::new(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Eq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[fixture]
    fn dir() -> TempDir {
        TempDir::new().expect("temp dir")
    }

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("write store file");
        path
    }

    #[rstest]
    fn loads_rows_in_file_order(dir: TempDir) {
        let path = write(&dir, "rows.json", r#"[{"id":3},{"id":1},{"id":2}]"#);
        let rows: Vec<Row> = load(&path).expect("load rows");
        assert_eq!(rows, vec![Row { id: 3 }, Row { id: 1 }, Row { id: 2 }]);
    }

    #[rstest]
    fn empty_array_is_empty(dir: TempDir) {
        let path = write(&dir, "rows.json", "[]");
        let rows: Vec<Row> = load(&path).expect("load rows");
        assert!(rows.is_empty());
    }

    #[rstest]
    fn missing_file_is_a_read_error(dir: TempDir) {
        let path = dir.path().join("absent.json");
        let err = load::<Row>(&path).expect_err("file is missing");
        assert!(matches!(err, JsonStoreError::Read { .. }), "got {err:?}");
    }

    #[rstest]
    #[case("{not json")]
    #[case(r#"{"id":1}"#)]
    #[case(r#"[{"name":"no id"}]"#)]
    #[case("")]
    fn malformed_contents_are_parse_errors(dir: TempDir, #[case] contents: &str) {
        let path = write(&dir, "rows.json", contents);
        let err = load::<Row>(&path).expect_err("contents are invalid");
        assert!(matches!(err, JsonStoreError::Parse { .. }), "got {err:?}");
    }

    #[rstest]
    fn directory_path_is_a_read_error(dir: TempDir) {
        let err = load::<Row>(dir.path()).expect_err("directory is not a store");
        assert!(matches!(err, JsonStoreError::Read { .. }), "got {err:?}");
    }
}
