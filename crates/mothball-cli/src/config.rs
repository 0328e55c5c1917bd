//! Configuration assembly: command-line flags merged over a profile file.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use mothball_p5::P5Endpoint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 8000;

/// Connection profile loaded from a TOML file.
///
/// Every field is optional; command-line flags take precedence over
/// whatever the file supplies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Username of an authorized P5 server user
    pub username: Option<String>,

    /// Password for that user
    pub password: Option<String>,

    /// IP or DNS name of the P5 server
    pub address: Option<String>,

    /// Port the P5 server is running on
    pub port: Option<u16>,

    /// P5 archive plan to submit the job against
    pub plan: Option<u32>,
}

impl Profile {
    /// Default profile location (`~/.mothball/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".mothball").join("config.toml"))
    }

    /// Load a profile from `path`, or from the default location when no
    /// path is given.
    ///
    /// An absent default file is simply an empty profile; an explicitly
    /// named file that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => Self::read(explicit),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::read(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Fully-resolved, immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Resolved path of the nsdchat binary
    pub nsdchat: PathBuf,

    /// P5 server coordinates and credentials
    pub endpoint: P5Endpoint,

    /// Archive plan the job is submitted against
    pub plan: u32,

    /// Root of the projects directory
    pub source_directory: PathBuf,

    /// Settle threshold in days
    pub settle_days: u64,

    /// Evaluate only; never contact the server
    pub dry_run: bool,
}

impl Settings {
    /// Merge command-line flags over the profile file.
    ///
    /// Credentials, server address, and plan must end up set from one of
    /// the two sources; the port falls back to the P5 default.
    pub fn resolve(cli: Cli, profile: Profile) -> Result<Self> {
        let require = |value: Option<String>, what: &str| {
            value.ok_or_else(|| CliError::Config(format!("no P5 {} configured", what)))
        };

        let username = require(cli.username.or(profile.username), "username")?;
        let password = require(cli.password.or(profile.password), "password")?;
        let host = require(cli.address.or(profile.address), "server address")?;
        let plan = cli
            .plan
            .or(profile.plan)
            .ok_or_else(|| CliError::Config("no P5 archive plan configured".to_string()))?;
        let port = cli.port.or(profile.port).unwrap_or(DEFAULT_PORT);

        Ok(Self {
            nsdchat: cli.aw_path.join("bin").join("nsdchat"),
            endpoint: P5Endpoint {
                host,
                port,
                username,
                password,
            },
            plan,
            source_directory: cli.source_directory,
            settle_days: cli.settle_time,
            dry_run: cli.dry_run,
        })
    }
}
