//! Error types for the P5 bridge

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving the P5 server
#[derive(Debug, Error)]
pub enum P5Error {
    /// The nsdchat process could not be spawned or its output collected
    #[error("failed to run {binary}: {source}")]
    Spawn {
        /// Binary that was being executed
        binary: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The server refused to create an archive selection
    #[error("could not create archive selection: {detail}")]
    SelectionCreate {
        /// Diagnostic text reported by the server
        detail: String,
    },

    /// The server refused to submit the selection as a job
    #[error("could not submit archive job: {detail}")]
    Submit {
        /// Diagnostic text reported by the server
        detail: String,
    },
}
