//! Directory enumeration for the projects root

use crate::ScanError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Names of the immediate child directories of `root`
///
/// Non-directory entries are skipped. The order follows the underlying
/// directory iteration and is not stable across invocations; callers must
/// not depend on it.
pub fn subdirectories(root: &Path) -> Result<Vec<String>, ScanError> {
    let read_dir_err = |source| ScanError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(root).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let file_type = entry.file_type().map_err(|source| ScanError::Stat {
            path: entry.path(),
            source,
        })?;
        if file_type.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// Every non-directory entry under `folder`, at any depth
///
/// Directory entries themselves are never yielded; symlinks and special
/// files come through as whatever the traversal reports. Unreadable entries
/// surface as `Err` items so the caller decides their fate. Each call
/// re-walks the tree from scratch.
pub fn files_under(folder: &Path) -> impl Iterator<Item = Result<PathBuf, ScanError>> {
    WalkDir::new(folder)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_dir() => None,
            Ok(e) => Some(Ok(e.into_path())),
            Err(e) => Some(Err(ScanError::Walk(e))),
        })
}
