//! Run controller: one pass from discovery to submission.

use crate::config::Settings;
use crate::error::{CliError, Result};
use mothball_p5::{ArchiveReport, CommandExecutor, Orchestrator, P5Client};
use mothball_scan::{Evaluator, SettleThreshold};
use std::time::SystemTime;
use tracing::{error, info};

/// What one run decided and did.
#[derive(Debug)]
pub struct RunSummary {
    /// Folder names that qualified, in discovery order
    pub eligible: Vec<String>,
    /// Submission outcome; `None` for a dry run or when nothing qualified
    pub report: Option<ArchiveReport>,
}

/// Execute one archival run.
///
/// The executor is injected so tests can drive the whole run against an
/// in-memory P5 stand-in; production hands in the real nsdchat spawner.
pub fn execute<E: CommandExecutor>(settings: &Settings, executor: E) -> Result<RunSummary> {
    execute_at(SystemTime::now(), settings, executor)
}

/// Execute one run judging file ages against an explicit reference time.
pub fn execute_at<E: CommandExecutor>(
    now: SystemTime,
    settings: &Settings,
    executor: E,
) -> Result<RunSummary> {
    if settings.dry_run {
        info!("Starting run in dry run mode.");
    } else {
        info!("Starting run.");
    }

    if !settings.nsdchat.is_file() {
        error!(
            "Could not find P5 CLI at {}, exiting",
            settings.nsdchat.display()
        );
        return Err(CliError::MissingBinary(settings.nsdchat.clone()));
    }
    if !settings.source_directory.is_dir() {
        error!(
            "Could not find source directory at {}, exiting",
            settings.source_directory.display()
        );
        return Err(CliError::MissingSourceRoot(settings.source_directory.clone()));
    }

    let evaluator = Evaluator::at(
        now,
        &settings.source_directory,
        SettleThreshold::days(settings.settle_days),
    );

    let mut eligible = Vec::new();
    for name in evaluator.candidates()? {
        if evaluator.evaluate(&name).eligible() {
            info!("Folder {} meets requirements, adding to queue.", name);
            eligible.push(name);
        } else {
            info!("Folder {} does not meet requirements, skipping.", name);
        }
    }

    let report = if settings.dry_run {
        None
    } else if eligible.is_empty() {
        info!("No folders meet requirements.");
        None
    } else {
        let client = P5Client::new(executor, settings.plan);
        let orchestrator = Orchestrator::new(client, &settings.source_directory);
        Some(orchestrator.archive(&eligible)?)
    };

    info!("Run complete. Exiting.");
    Ok(RunSummary { eligible, report })
}
