//! Mothball CLI library.
//!
//! This library provides the command-line surface for Mothball: argument
//! parsing, configuration assembly, log-sink setup, and the run controller
//! that ties the aging scan to the P5 archive orchestration.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod run;

pub use cli::Cli;
pub use config::{Profile, Settings};
pub use error::{CliError, Result};
pub use run::RunSummary;
