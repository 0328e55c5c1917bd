//! File-age evaluation against a settle cutoff

use crate::ScanError;
use std::path::Path;
use std::time::{Duration, SystemTime};

const SECONDS_PER_DAY: u64 = 86_400;

/// Minimum time a file must remain unmodified before it counts as settled
///
/// Expressed in whole days. The threshold itself is inert; it turns into a
/// concrete cutoff instant once per evaluation pass via [`cutoff`].
///
/// [`cutoff`]: SettleThreshold::cutoff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleThreshold {
    days: u64,
}

impl SettleThreshold {
    /// Threshold of the given number of days
    pub fn days(days: u64) -> Self {
        Self { days }
    }

    /// Cutoff instant for the given reference time
    ///
    /// Files modified at or before the cutoff are settled. A threshold the
    /// platform cannot even represent clamps to the epoch.
    pub fn cutoff(&self, now: SystemTime) -> SystemTime {
        now.checked_sub(Duration::from_secs(self.days.saturating_mul(SECONDS_PER_DAY)))
            .unwrap_or(SystemTime::UNIX_EPOCH)
    }
}

/// Whether the file at `path` was last modified at or before `cutoff`
///
/// The boundary is inclusive: a file exactly as old as the threshold is
/// settled. An unreadable or missing path is a [`ScanError::Stat`] for the
/// caller to handle, never a silent skip.
pub fn is_settled(path: &Path, cutoff: SystemTime) -> Result<bool, ScanError> {
    let metadata = std::fs::metadata(path).map_err(|source| ScanError::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    let mtime = metadata.modified().map_err(|source| ScanError::Stat {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(mtime <= cutoff)
}
