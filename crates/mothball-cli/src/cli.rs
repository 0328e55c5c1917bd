//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Archive settled project folders to an Archiware P5 server.
///
/// Every immediate subdirectory of the source directory is a candidate; a
/// candidate is archived only when all files beneath it have been untouched
/// for the settle time. Eligible folders are submitted together as one P5
/// archive job.
#[derive(Debug, Parser)]
#[command(name = "mothball")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the P5 installation directory (nsdchat is expected under bin/)
    #[arg(short = 'n', long, value_name = "PATH", default_value = "/usr/local/aw")]
    pub aw_path: PathBuf,

    /// Username of an authorized P5 server user
    #[arg(short, long, env = "MOTHBALL_USERNAME")]
    pub username: Option<String>,

    /// Password of that P5 server user
    #[arg(short, long, env = "MOTHBALL_PASSWORD")]
    pub password: Option<String>,

    /// IP or DNS name of the P5 server
    #[arg(short, long)]
    pub address: Option<String>,

    /// Port the P5 server is running on
    #[arg(short = 'r', long, value_name = "INT")]
    pub port: Option<u16>,

    /// P5 archive plan to submit the job against
    #[arg(short = 'l', long, value_name = "INT")]
    pub plan: Option<u32>,

    /// Root of the projects directory
    #[arg(short, long, value_name = "PATH")]
    pub source_directory: PathBuf,

    /// Days a file must stay untouched before its folder may be archived
    #[arg(short = 't', long, value_name = "INT")]
    pub settle_time: u64,

    /// Evaluate all folders, but do not contact the P5 server
    #[arg(long)]
    pub dry_run: bool,

    /// Append log events to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// TOML file supplying connection defaults (flags take precedence)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
