//! Error types for scaffolding operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while materializing a project.
#[derive(Debug, Error)]
pub enum Error {
    /// A directory in the project layout could not be created
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// A template file could not be written
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// File that could not be written
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// Result type for scaffolding operations.
pub type Result<T> = std::result::Result<T, Error>;
