//! Folder eligibility: a candidate qualifies only when everything under it
//! has settled

use crate::age::{is_settled, SettleThreshold};
use crate::walk;
use std::path::PathBuf;
use std::time::SystemTime;
use tracing::{info, warn};

/// Verdict for a single candidate folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderVerdict {
    /// Folder name relative to the projects root
    pub name: String,
    /// Files modified after the settle cutoff, plus any entry that could
    /// not be read
    pub unsettled_files: usize,
}

impl FolderVerdict {
    /// A folder qualifies only when nothing beneath it is unsettled
    pub fn eligible(&self) -> bool {
        self.unsettled_files == 0
    }
}

/// Evaluates candidate folders against a settle cutoff fixed at construction
///
/// The cutoff is computed once per evaluation pass, so every folder in a run
/// is judged against the same instant. Verdicts are a pure function of the
/// filesystem state, the threshold, and that instant.
pub struct Evaluator {
    root: PathBuf,
    cutoff: SystemTime,
}

impl Evaluator {
    /// Evaluator using the current wall clock as the reference time
    pub fn new(root: impl Into<PathBuf>, threshold: SettleThreshold) -> Self {
        Self::at(SystemTime::now(), root, threshold)
    }

    /// Evaluator with an explicit reference time
    pub fn at(now: SystemTime, root: impl Into<PathBuf>, threshold: SettleThreshold) -> Self {
        Self {
            root: root.into(),
            cutoff: threshold.cutoff(now),
        }
    }

    /// Candidate folder names, in discovery order
    pub fn candidates(&self) -> Result<Vec<String>, crate::ScanError> {
        walk::subdirectories(&self.root)
    }

    /// Judge one candidate folder by name
    ///
    /// Counts the files under the folder that fail the settle check. An
    /// entry that cannot be stat'd counts as unsettled rather than aborting
    /// the run. A folder with no files at all qualifies.
    pub fn evaluate(&self, name: &str) -> FolderVerdict {
        let folder = self.root.join(name);
        let mut unsettled = 0usize;

        for entry in walk::files_under(&folder) {
            match entry.and_then(|path| is_settled(&path, self.cutoff)) {
                Ok(true) => {}
                Ok(false) => unsettled += 1,
                Err(e) => {
                    warn!("Counting unreadable entry in {} as unsettled: {}", name, e);
                    unsettled += 1;
                }
            }
        }

        if unsettled == 0 {
            info!("Folder {} meets aging requirements", name);
        } else {
            info!(
                "{} files found that don't meet aging in {}, skipping",
                unsettled, name
            );
        }

        FolderVerdict {
            name: name.to_string(),
            unsettled_files: unsettled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;

    const DAY: Duration = Duration::from_secs(86_400);

    fn touch(path: &std::path::Path, age_days: u64) {
        let file = File::create(path).unwrap();
        let mtime = SystemTime::now() - DAY * u32::try_from(age_days).unwrap();
        file.set_modified(mtime).unwrap();
    }

    #[test]
    fn test_empty_folder_is_eligible() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("empty")).unwrap();

        let evaluator = Evaluator::new(root.path(), SettleThreshold::days(30));
        let verdict = evaluator.evaluate("empty");

        assert!(verdict.eligible());
        assert_eq!(verdict.unsettled_files, 0);
    }

    #[test]
    fn test_all_files_old_enough_is_eligible() {
        let root = tempfile::tempdir().unwrap();
        let project = root.path().join("wrapped");
        let renders = project.join("renders");
        fs::create_dir_all(&renders).unwrap();
        touch(&project.join("edit.prproj"), 40);
        touch(&renders.join("final.mov"), 35);

        let evaluator = Evaluator::new(root.path(), SettleThreshold::days(30));
        assert!(evaluator.evaluate("wrapped").eligible());
    }

    #[test]
    fn test_one_fresh_file_disqualifies_the_folder() {
        let root = tempfile::tempdir().unwrap();
        let project = root.path().join("active");
        fs::create_dir(&project).unwrap();
        touch(&project.join("old.psd"), 60);
        touch(&project.join("new.psd"), 5);

        let evaluator = Evaluator::new(root.path(), SettleThreshold::days(30));
        let verdict = evaluator.evaluate("active");

        assert!(!verdict.eligible());
        assert_eq!(verdict.unsettled_files, 1);
    }

    #[test]
    fn test_unsettled_count_matches_the_fresh_files() {
        let root = tempfile::tempdir().unwrap();
        let project = root.path().join("busy");
        fs::create_dir(&project).unwrap();
        touch(&project.join("a.wav"), 1);
        touch(&project.join("b.wav"), 2);
        touch(&project.join("c.wav"), 90);

        let evaluator = Evaluator::new(root.path(), SettleThreshold::days(30));
        assert_eq!(evaluator.evaluate("busy").unsettled_files, 2);
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let root = tempfile::tempdir().unwrap();
        let project = root.path().join("steady");
        fs::create_dir(&project).unwrap();
        touch(&project.join("x.dat"), 10);

        let evaluator = Evaluator::at(
            SystemTime::now(),
            root.path(),
            SettleThreshold::days(30),
        );
        let first = evaluator.evaluate("steady");
        let second = evaluator.evaluate("steady");
        assert_eq!(first, second);
    }

    #[test]
    fn test_candidates_lists_subdirectories() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("p1")).unwrap();
        fs::create_dir(root.path().join("p2")).unwrap();
        File::create(root.path().join("notes.txt")).unwrap();

        let evaluator = Evaluator::new(root.path(), SettleThreshold::days(1));
        let mut names = evaluator.candidates().unwrap();
        names.sort();
        assert_eq!(names, vec!["p1", "p2"]);
    }

    #[test]
    fn test_zero_day_threshold_accepts_existing_files() {
        let root = tempfile::tempdir().unwrap();
        let project = root.path().join("instant");
        fs::create_dir(&project).unwrap();
        let path = project.join("done.txt");
        File::create(&path).unwrap();

        // With a zero-day threshold the cutoff equals the reference time;
        // judge against the file's own mtime so the boundary is exercised.
        let mtime = fs::metadata(&path).unwrap().modified().unwrap();
        let evaluator = Evaluator::at(mtime, root.path(), SettleThreshold::days(0));
        assert!(evaluator.evaluate("instant").eligible());
    }
}
