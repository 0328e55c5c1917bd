//! Error types for scan operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning the projects directory
#[derive(Debug, Error)]
pub enum ScanError {
    /// A directory could not be enumerated
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// Directory that could not be listed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A file's metadata could not be read
    #[error("failed to stat {path}: {source}")]
    Stat {
        /// File whose modification time was wanted
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The recursive walk hit an unreadable entry
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),
}
