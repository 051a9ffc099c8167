//! CLI support for the `attendance-seed` binary.
//!
//! Parsing and message formatting live here so they can be exercised without
//! spawning a process.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::SeedError;
use crate::init::{InitOutcome, initialise};

const DEFAULT_DATA_DIR: &str = "data";

/// Parsed options for the seed CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    data_dir: PathBuf,
}

impl Options {
    /// Directory the data files are written into.
    ///
    /// # Example
    ///
    /// ```
    /// use seed_data::seed_cli::{ParseOutcome, parse_args};
    ///
    /// let ParseOutcome::Options(options) = parse_args(std::iter::empty()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    /// assert!(options.data_dir().ends_with("data"));
    /// ```
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Errors surfaced by the seed CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// Writing the data files failed.
    #[error("seeding failed: {source}")]
    Seed {
        /// Underlying seeding error.
        #[from]
        #[source]
        source: SeedError,
    },
}

/// Parse CLI arguments (without the program name).
///
/// # Errors
///
/// Returns [`CliError`] for unknown flags or a flag missing its value.
///
/// # Example
///
/// ```
/// use seed_data::seed_cli::{ParseOutcome, parse_args};
///
/// let args = vec!["--data-dir".to_owned(), "/srv/attendance".to_owned()];
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut data_dir: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--data-dir" => {
                let value = args.next().ok_or(CliError::MissingValue {
                    flag: "--data-dir",
                })?;
                data_dir = Some(PathBuf::from(value));
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(Options {
        data_dir: data_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
    }))
}

/// Initialise the data directory named by `options`.
///
/// # Errors
///
/// Returns [`CliError::Seed`] when [`initialise`] fails.
pub fn run(options: &Options) -> Result<InitOutcome, CliError> {
    Ok(initialise(&options.data_dir)?)
}

/// Format the summary printed after a successful run.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// use seed_data::InitOutcome;
/// use seed_data::seed_cli::success_message;
///
/// let outcome = InitOutcome {
///     created: vec!["users.json"],
///     existing: vec!["attendance.json", "leaves.json"],
/// };
/// let message = success_message(&outcome, Path::new("data"));
/// assert!(message.contains("created users.json"));
/// ```
#[must_use]
pub fn success_message(outcome: &InitOutcome, data_dir: &Path) -> String {
    let mut lines = vec![format!("Initialised {}", data_dir.display())];
    lines.extend(outcome.created.iter().map(|name| format!("  created {name}")));
    lines.extend(outcome.existing.iter().map(|name| format!("  kept {name}")));
    lines.join("\n")
}
