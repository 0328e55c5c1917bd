//! Typed wrapper over the nsdchat command vocabulary

use crate::{CommandExecutor, P5Error};
use std::fmt;
use std::path::Path;

/// Client target the server resolves archive selections against
const CLIENT_TARGET: &str = "localhost";

macro_rules! opaque_handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            /// The raw token as the server returned it
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_handle!(
    /// Opaque token for an archive selection under construction
    SelectionHandle
);
opaque_handle!(
    /// Opaque token for a directory enrolled in a selection
    DirectoryHandle
);
opaque_handle!(
    /// Opaque identifier of a submitted archive job
    JobHandle
);

/// Typed view of the four nsdchat operations this tool needs
///
/// Replies are trimmed of trailing whitespace before interpretation; an
/// empty reply means the operation produced no handle, and the reason is
/// available through [`last_error`].
///
/// [`last_error`]: P5Client::last_error
pub struct P5Client<E> {
    executor: E,
    plan: u32,
}

impl<E: CommandExecutor> P5Client<E> {
    /// Client submitting against the given archive plan
    pub fn new(executor: E, plan: u32) -> Self {
        Self { executor, plan }
    }

    fn call(&self, words: &[&str]) -> Result<Option<String>, P5Error> {
        let args: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
        let raw = self.executor.execute(&args)?;
        let reply = raw.trim_end();
        if reply.is_empty() {
            Ok(None)
        } else {
            Ok(Some(reply.to_string()))
        }
    }

    /// Create a new archive selection bound to the configured plan
    ///
    /// `None` means the server refused; fetch the reason with
    /// [`last_error`](P5Client::last_error).
    pub fn create_selection(&self) -> Result<Option<SelectionHandle>, P5Error> {
        let reply = self.call(&[
            "ArchiveSelection",
            "create",
            CLIENT_TARGET,
            &self.plan.to_string(),
        ])?;
        Ok(reply.map(SelectionHandle))
    }

    /// Enroll the directory at `path` into `selection`
    pub fn add_directory(
        &self,
        selection: &SelectionHandle,
        path: &Path,
    ) -> Result<Option<DirectoryHandle>, P5Error> {
        // Tcl brace quoting so paths with spaces survive the nsdchat parser
        let braced = format!("{{{}}}", path.display());
        let reply = self.call(&[
            "ArchiveSelection",
            selection.as_str(),
            "adddirectory",
            &braced,
        ])?;
        Ok(reply.map(DirectoryHandle))
    }

    /// Submit `selection` for immediate execution
    pub fn submit(&self, selection: &SelectionHandle) -> Result<Option<JobHandle>, P5Error> {
        let reply = self.call(&["ArchiveSelection", selection.as_str(), "submit", "now"])?;
        Ok(reply.map(JobHandle))
    }

    /// Most recent error text the server recorded for this session
    pub fn last_error(&self) -> Result<String, P5Error> {
        let reply = self.call(&["geterror"])?;
        Ok(reply.unwrap_or_else(|| "no error detail available".to_string()))
    }
}
