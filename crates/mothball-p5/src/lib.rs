//! Mothball P5
//!
//! Bridge to an Archiware P5 server through its `nsdchat` command-line
//! client, plus the orchestration that turns a list of settled folders into
//! one submitted archive job.
//!
//! # Overview
//!
//! - [`CommandExecutor`]: one-method capability, "run this command, hand
//!   back its stdout". The real implementation spawns `nsdchat`; tests
//!   substitute an in-memory fake so nothing forks.
//! - [`P5Client`]: typed wrapper over the nsdchat command vocabulary. P5
//!   signals failure with an empty reply rather than an exit status, so
//!   every operation returns `Option<handle>` and diagnostics come from a
//!   separate `geterror` query.
//! - [`Orchestrator`]: drives create → enroll → submit for one run. A
//!   failed creation is terminal; a failed enrollment skips that folder and
//!   continues; the submission covers whatever actually enrolled.
//!
//! # Usage
//!
//! ```no_run
//! use mothball_p5::{NsdchatExecutor, Orchestrator, P5Client, P5Endpoint};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = P5Endpoint {
//!     host: "p5.example.com".into(),
//!     port: 8000,
//!     username: "archiver".into(),
//!     password: "secret".into(),
//! };
//! let executor = NsdchatExecutor::new("/usr/local/aw/bin/nsdchat", &endpoint);
//! let client = P5Client::new(executor, 3);
//! let orchestrator = Orchestrator::new(client, "/mnt/projects");
//!
//! let report = orchestrator.archive(&["wrapped".into(), "delivered".into()])?;
//! println!("job {} covers {} folders", report.job, report.enrolled.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod executor;
mod orchestrator;

pub use client::{DirectoryHandle, JobHandle, P5Client, SelectionHandle};
pub use error::P5Error;
pub use executor::{CommandExecutor, NsdchatExecutor, P5Endpoint};
pub use orchestrator::{ArchiveReport, Orchestrator};
