//! Error types for the seed-data crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing the initial data files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The data directory could not be created or opened.
    #[error("failed to prepare data directory '{path}': {message}")]
    DataDir {
        /// Directory that could not be prepared.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// Checking whether a data file already exists failed.
    #[error("failed to inspect '{path}': {message}")]
    Probe {
        /// File that could not be inspected.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A data file could not be written.
    #[error("failed to write '{path}': {message}")]
    Write {
        /// File (or temporary file) that could not be written.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// Initial content could not be serialised.
    #[error("failed to encode initial content: {message}")]
    Encode {
        /// Description of the serialisation error.
        message: String,
    },
}
