//! External command execution for the P5 bridge

use crate::P5Error;
use std::path::PathBuf;
use std::process::Command;

/// Session identifier nsdchat registers with the server
const SESSION_ID: &str = "pvt_mothball";

/// nsdchat talks to the server's API port, which sits this far above the
/// port the server itself listens on
const API_PORT_OFFSET: u32 = 1001;

/// Blocking "execute a command, return its stdout" capability
///
/// One call spawns one external process and waits for it to finish. A
/// non-zero exit status is not an error at this layer: P5 signals failure
/// through an empty reply, and diagnostics are fetched with a separate
/// `geterror` call. Injectable so tests can substitute an in-memory fake
/// without forking anything.
pub trait CommandExecutor {
    /// Execute the command words, returning raw stdout as text
    fn execute(&self, args: &[String]) -> Result<String, P5Error>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &E {
    fn execute(&self, args: &[String]) -> Result<String, P5Error> {
        (**self).execute(args)
    }
}

/// Coordinates of a P5 server and the credentials to reach it
#[derive(Debug, Clone)]
pub struct P5Endpoint {
    /// IP or DNS name of the server
    pub host: String,
    /// Port the server is running on (not the API port)
    pub port: u16,
    /// Username of an authorized server user
    pub username: String,
    /// Password for that user
    pub password: String,
}

impl P5Endpoint {
    /// awsock connection string nsdchat expects after `-s`
    pub(crate) fn socket(&self) -> String {
        format!(
            "awsock:/{}:{}:{}@{}:{}",
            self.username,
            self.password,
            SESSION_ID,
            self.host,
            u32::from(self.port) + API_PORT_OFFSET
        )
    }
}

/// Executor that spawns the real nsdchat binary once per call
pub struct NsdchatExecutor {
    binary: PathBuf,
    socket: String,
}

impl NsdchatExecutor {
    /// Executor for the nsdchat binary at `binary`, bound to `endpoint`
    pub fn new(binary: impl Into<PathBuf>, endpoint: &P5Endpoint) -> Self {
        Self {
            binary: binary.into(),
            socket: endpoint.socket(),
        }
    }
}

impl CommandExecutor for NsdchatExecutor {
    fn execute(&self, args: &[String]) -> Result<String, P5Error> {
        let output = Command::new(&self.binary)
            .arg("-s")
            .arg(&self.socket)
            .arg("-c")
            .args(args)
            .output()
            .map_err(|source| P5Error::Spawn {
                binary: self.binary.clone(),
                source,
            })?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
