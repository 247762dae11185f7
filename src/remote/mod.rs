//! Command execution on the server being checked.
//!
//! Checks never talk to a transport directly; they go through the
//! [`RemoteExecutor`] trait. Two implementations ship with Gangway:
//!
//! - [`SshExecutor`] runs commands on a remote host through the system `ssh`
//! - [`LocalExecutor`] runs commands on this machine
//!
//! A command that runs and exits non-zero is a normal [`RemoteOutput`].
//! Only a command that could not be delivered at all (shell failed to
//! start, SSH connection refused) is an `Err`.

pub mod local;
pub mod shell;
pub mod ssh;

pub use local::LocalExecutor;
pub use ssh::SshExecutor;

use std::time::Duration;

use crate::config::ConnectionConfig;
use crate::error::Result;

/// Result of running a command on the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless output was collected).
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,
}

impl RemoteOutput {
    /// Output of a command that exited with `code`.
    pub fn with_status(code: i32, stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(code),
            stdout: stdout.into(),
            ..Default::default()
        }
    }

    /// Whether the command exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Trimmed standard output.
    pub fn text(&self) -> &str {
        self.stdout.trim()
    }
}

/// Runs shell-style command lines on the target server.
pub trait RemoteExecutor {
    /// Run a command line.
    ///
    /// When `collect_output` is false stdout is discarded and
    /// [`RemoteOutput::stdout`] is empty.
    fn run(&mut self, command: &str, collect_output: bool) -> Result<RemoteOutput>;

    /// Every command line issued so far, in order.
    fn history(&self) -> &[String];

    /// Human-readable name of the target (e.g. `deploy@example.com`).
    fn target(&self) -> String;
}

/// Build the executor described by the connection config.
pub fn connect(connection: &ConnectionConfig) -> Box<dyn RemoteExecutor> {
    if connection.local {
        Box::new(LocalExecutor::new(connection.root.clone()))
    } else {
        Box::new(SshExecutor::new(connection.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_requires_zero_exit() {
        assert!(RemoteOutput::with_status(0, "").success());
        assert!(!RemoteOutput::with_status(1, "").success());
        assert!(!RemoteOutput::default().success());
    }

    #[test]
    fn text_is_trimmed() {
        let output = RemoteOutput::with_status(0, "  5.5.9\n");
        assert_eq!(output.text(), "5.5.9");
    }

    #[test]
    fn connect_picks_local_executor() {
        let connection = ConnectionConfig {
            local: true,
            ..Default::default()
        };
        assert_eq!(connect(&connection).target(), "localhost");
    }

    #[test]
    fn connect_picks_ssh_executor() {
        let connection = ConnectionConfig {
            host: Some("example.com".to_string()),
            user: Some("deploy".to_string()),
            ..Default::default()
        };
        assert_eq!(connect(&connection).target(), "deploy@example.com");
    }
}
