//! Create → enroll → submit protocol for one archive run

use crate::client::{JobHandle, P5Client, SelectionHandle};
use crate::{CommandExecutor, P5Error};
use std::path::PathBuf;
use tracing::{error, info};

/// Outcome of one successfully submitted archive run
#[derive(Debug, Clone)]
pub struct ArchiveReport {
    /// Selection the job was built from
    pub selection: SelectionHandle,
    /// Job the server accepted
    pub job: JobHandle,
    /// How many folders were eligible going in
    pub eligible_count: usize,
    /// Folders that actually made it into the selection, in enrollment
    /// order; can be a strict subset of the eligible set
    pub enrolled: Vec<String>,
}

/// Drives the P5 server through one batch-archive run
///
/// Exactly one selection is created per run, enrollment failures skip the
/// folder and keep going, and the submission covers whatever enrolled.
/// Selection-creation and submission failures are terminal.
pub struct Orchestrator<E> {
    client: P5Client<E>,
    source_root: PathBuf,
}

impl<E: CommandExecutor> Orchestrator<E> {
    /// Orchestrator enrolling folders relative to `source_root`
    pub fn new(client: P5Client<E>, source_root: impl Into<PathBuf>) -> Self {
        Self {
            client,
            source_root: source_root.into(),
        }
    }

    /// Archive `folders` (names relative to the source root) as one job
    ///
    /// Folders are enrolled in the order given so the log lines up with the
    /// eventual job contents. The per-folder log events plus the final
    /// counts are enough to reconstruct exactly what was submitted.
    pub fn archive(&self, folders: &[String]) -> Result<ArchiveReport, P5Error> {
        let selection = match self.client.create_selection()? {
            Some(selection) => selection,
            None => {
                let detail = self.client.last_error()?;
                error!("Could not create archive selection: {}. Exiting.", detail);
                return Err(P5Error::SelectionCreate { detail });
            }
        };
        info!("Successfully created archive selection {}", selection);

        let mut enrolled = Vec::new();
        for folder in folders {
            let path = self.source_root.join(folder);
            match self.client.add_directory(&selection, &path)? {
                Some(handle) => {
                    info!("Successfully added directory {} with handle {}", folder, handle);
                    enrolled.push(folder.clone());
                }
                None => {
                    let detail = self.client.last_error()?;
                    error!(
                        "Could not add directory {} to archive selection, skipping: {}",
                        folder, detail
                    );
                }
            }
        }

        match self.client.submit(&selection)? {
            Some(job) => {
                info!(
                    "Successfully submitted job {}: {} of {} eligible folders enrolled",
                    job,
                    enrolled.len(),
                    folders.len()
                );
                Ok(ArchiveReport {
                    selection,
                    job,
                    eligible_count: folders.len(),
                    enrolled,
                })
            }
            None => {
                let detail = self.client.last_error()?;
                error!("Could not submit job: {}. Exiting.", detail);
                Err(P5Error::Submit { detail })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory stand-in for the P5 server, scriptable per operation
    struct FakeServer {
        create_reply: &'static str,
        submit_reply: &'static str,
        rejected_folders: Vec<&'static str>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl FakeServer {
        fn healthy() -> Self {
            Self {
                create_reply: "10001",
                submit_reply: "20042",
                rejected_folders: Vec::new(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn operations(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .map(|args| match args.first().map(String::as_str) {
                    Some("geterror") => "geterror".to_string(),
                    Some("ArchiveSelection") => args[if args[1] == "create" { 1 } else { 2 }].clone(),
                    _ => panic!("unexpected command {:?}", args),
                })
                .collect()
        }
    }

    impl CommandExecutor for FakeServer {
        fn execute(&self, args: &[String]) -> Result<String, P5Error> {
            self.calls.borrow_mut().push(args.to_vec());
            let reply = match args.first().map(String::as_str) {
                Some("geterror") => "simulated server failure".to_string(),
                Some("ArchiveSelection") if args[1] == "create" => self.create_reply.to_string(),
                Some("ArchiveSelection") if args[2] == "adddirectory" => {
                    let rejected = self
                        .rejected_folders
                        .iter()
                        .any(|folder| args[3].ends_with(&format!("/{}}}", folder)));
                    if rejected {
                        String::new()
                    } else {
                        format!("dir-{}", self.calls.borrow().len())
                    }
                }
                Some("ArchiveSelection") if args[2] == "submit" => self.submit_reply.to_string(),
                _ => panic!("unexpected command {:?}", args),
            };
            Ok(format!("{}\n", reply))
        }
    }

    fn folders(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_full_run_enrolls_everything_and_submits() {
        let server = FakeServer::healthy();
        let orchestrator = Orchestrator::new(P5Client::new(&server, 3), "/mnt/projects");

        let report = orchestrator.archive(&folders(&["a", "b"])).unwrap();

        assert_eq!(report.selection.as_str(), "10001");
        assert_eq!(report.job.as_str(), "20042");
        assert_eq!(report.eligible_count, 2);
        assert_eq!(report.enrolled, vec!["a", "b"]);
        assert_eq!(
            server.operations(),
            vec!["create", "adddirectory", "adddirectory", "submit"]
        );
    }

    #[test]
    fn test_creation_failure_stops_before_any_enrollment() {
        let server = FakeServer {
            create_reply: "",
            ..FakeServer::healthy()
        };
        let orchestrator = Orchestrator::new(P5Client::new(&server, 3), "/mnt/projects");

        let result = orchestrator.archive(&folders(&["a", "b"]));

        match result {
            Err(P5Error::SelectionCreate { detail }) => {
                assert_eq!(detail, "simulated server failure");
            }
            other => panic!("expected creation failure, got {:?}", other),
        }
        // One operational call, then only the diagnostic query
        assert_eq!(server.operations(), vec!["create", "geterror"]);
    }

    #[test]
    fn test_enrollment_failure_skips_the_folder_and_continues() {
        let server = FakeServer {
            rejected_folders: vec!["b"],
            ..FakeServer::healthy()
        };
        let orchestrator = Orchestrator::new(P5Client::new(&server, 3), "/mnt/projects");

        let report = orchestrator.archive(&folders(&["a", "b", "c"])).unwrap();

        assert_eq!(report.eligible_count, 3);
        assert_eq!(report.enrolled, vec!["a", "c"]);
        assert_eq!(
            server.operations(),
            vec![
                "create",
                "adddirectory",
                "adddirectory",
                "geterror",
                "adddirectory",
                "submit"
            ]
        );
    }

    #[test]
    fn test_submission_failure_is_terminal() {
        let server = FakeServer {
            submit_reply: "",
            ..FakeServer::healthy()
        };
        let orchestrator = Orchestrator::new(P5Client::new(&server, 3), "/mnt/projects");

        let result = orchestrator.archive(&folders(&["a"]));
        assert!(matches!(result, Err(P5Error::Submit { .. })));
    }

    #[test]
    fn test_enrollment_preserves_the_given_order() {
        let server = FakeServer::healthy();
        let orchestrator = Orchestrator::new(P5Client::new(&server, 3), "/mnt/projects");

        let names = folders(&["zeta", "alpha", "mid"]);
        let report = orchestrator.archive(&names).unwrap();
        assert_eq!(report.enrolled, names);

        let dirs: Vec<String> = server
            .calls
            .borrow()
            .iter()
            .filter(|args| args.get(2).map(String::as_str) == Some("adddirectory"))
            .map(|args| args[3].clone())
            .collect();
        assert_eq!(
            dirs,
            vec![
                "{/mnt/projects/zeta}",
                "{/mnt/projects/alpha}",
                "{/mnt/projects/mid}"
            ]
        );
    }
}
