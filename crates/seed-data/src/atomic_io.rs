//! Atomic file writes.
//!
//! Contents go to a hidden temporary file in the target directory which is
//! then renamed over the target, so readers never observe a partial file.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::SeedError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Write `contents` to `path` inside `dir` atomically.
///
/// `path` must be a single file name relative to `dir`.
///
/// # Errors
///
/// Returns [`SeedError::Write`] if the temporary file cannot be written or
/// renamed.
pub(crate) fn write_atomic(dir: &Dir, path: &Utf8Path, contents: &str) -> Result<(), SeedError> {
    let mut components = path.components();
    let (Some(Utf8Component::Normal(file_name)), None) = (components.next(), components.next())
    else {
        return Err(SeedError::Write {
            path: path.as_std_path().to_path_buf(),
            message: "target must be a bare file name".to_owned(),
        });
    };
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(
        ".{}.tmp.{}.{}.{}",
        file_name,
        std::process::id(),
        suffix,
        counter
    );

    write_to_temp_file(dir, &tmp_name, path, contents)?;
    rename_temp_to_target(dir, &tmp_name, file_name, path)?;
    sync_directory(dir);

    Ok(())
}

fn write_to_temp_file(
    dir: &Dir,
    tmp_name: &str,
    target_path: &Utf8Path,
    contents: &str,
) -> Result<(), SeedError> {
    let tmp_path = target_path.with_file_name(tmp_name);
    let write_error = |err: io::Error| SeedError::Write {
        path: tmp_path.as_std_path().to_path_buf(),
        message: err.to_string(),
    };
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(tmp_name, &options).map_err(write_error)?;

    let written = file
        .write_all(contents.as_bytes())
        .and_then(|()| file.sync_all());
    if let Err(err) = written {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(write_error(err));
    }
    Ok(())
}

fn rename_temp_to_target(
    dir: &Dir,
    tmp_name: &str,
    target_name: &str,
    target_path: &Utf8Path,
) -> Result<(), SeedError> {
    if let Err(err) = rename_impl(dir, tmp_name, target_name) {
        drop(dir.remove_file(tmp_name));
        return Err(SeedError::Write {
            path: target_path.as_std_path().to_path_buf(),
            message: err.to_string(),
        });
    }
    Ok(())
}

#[cfg(windows)]
fn rename_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_impl(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_directory(dir: &Dir) {
    // Best effort.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cap_std::ambient_authority;
    use rstest::rstest;

    fn open(tmp: &tempfile::TempDir) -> Dir {
        Dir::open_ambient_dir(tmp.path(), ambient_authority()).expect("open temp dir")
    }

    #[rstest]
    fn writes_contents_and_leaves_no_temp_files() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = open(&tmp);

        write_atomic(&dir, Utf8Path::new("users.json"), "[]").expect("write");

        assert_eq!(dir.read_to_string("users.json").expect("read"), "[]");
        let names: Vec<String> = dir
            .entries()
            .expect("list")
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        assert_eq!(names, vec!["users.json".to_owned()]);
    }

    #[rstest]
    #[case("nested/users.json")]
    #[case("../users.json")]
    fn rejects_paths_that_are_not_bare_names(#[case] path: &str) {
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = open(&tmp);

        let err = write_atomic(&dir, Utf8Path::new(path), "[]").expect_err("rejected");
        assert!(matches!(err, SeedError::Write { .. }));
    }
}
