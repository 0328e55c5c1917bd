//! Mothball Scan
//!
//! Aging scan over a projects directory: enumerates candidate folders and
//! decides which ones have settled, meaning every file beneath them has been
//! left untouched for at least the configured number of days.
//!
//! # Overview
//!
//! The scan is split into three small pieces:
//! - **Age evaluation**: compare a file's modification time against a cutoff
//!   derived from the settle threshold.
//! - **Directory enumeration**: list a root's immediate subdirectories and
//!   walk each one recursively for regular files.
//! - **Eligibility**: a folder qualifies only when the count of unsettled
//!   files beneath it is exactly zero. An empty folder qualifies.
//!
//! Eligibility carries no state between runs; every run re-walks the tree
//! and recomputes every verdict from the filesystem alone.
//!
//! # Usage
//!
//! ```no_run
//! use mothball_scan::{Evaluator, SettleThreshold};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let evaluator = Evaluator::new("/mnt/projects", SettleThreshold::days(30));
//!
//! for name in evaluator.candidates()? {
//!     let verdict = evaluator.evaluate(&name);
//!     println!("{}: eligible = {}", verdict.name, verdict.eligible());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod age;
mod eligibility;
mod error;
mod walk;

pub use age::{is_settled, SettleThreshold};
pub use eligibility::{Evaluator, FolderVerdict};
pub use error::ScanError;
pub use walk::{files_under, subdirectories};
