//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The nsdchat binary was not found where expected
    #[error("Could not find P5 CLI at {0}")]
    MissingBinary(PathBuf),

    /// The projects root does not exist or is not a directory
    #[error("Could not find source directory at {0}")]
    MissingSourceRoot(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Scan error
    #[error("Scan error: {0}")]
    Scan(#[from] mothball_scan::ScanError),

    /// P5 bridge error
    #[error("P5 error: {0}")]
    P5(#[from] mothball_p5::P5Error),
}
