//! Executor that runs commands on a remote host via the system `ssh` client.
//!
//! Each command becomes one non-interactive `ssh` invocation:
//!
//! ```text
//! ssh -o BatchMode=yes -o ConnectTimeout=10 -p 2222 deploy@example.com 'cd /var/www/app && php -m'
//! ```
//!
//! `ssh` exits with 255 when the connection itself fails. That is reported
//! as [`GangwayError::RemoteUnreachable`] rather than a failing command, so a
//! host that cannot be reached is never mistaken for a missing tool.

use std::process::Command;

use crate::config::ConnectionConfig;
use crate::error::{GangwayError, Result};

use super::shell::{quote, run_process};
use super::{RemoteExecutor, RemoteOutput};

/// Exit status `ssh` uses for its own errors.
const SSH_ERROR_STATUS: i32 = 255;

/// Runs commands on a remote host over SSH.
#[derive(Debug)]
pub struct SshExecutor {
    connection: ConnectionConfig,
    history: Vec<String>,
}

impl SshExecutor {
    /// Create an executor for the given connection.
    pub fn new(connection: ConnectionConfig) -> Self {
        Self {
            connection,
            history: Vec::new(),
        }
    }

    /// The command line to run on the remote side, including the `cd` into root.
    pub fn remote_command(&self, command: &str) -> String {
        match &self.connection.root {
            Some(root) => format!("cd {} && {}", quote(root), command),
            None => command.to_string(),
        }
    }

    /// Arguments passed to `ssh` for `command`.
    pub fn ssh_args(&self, command: &str) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.connection.connect_timeout),
        ];

        if let Some(port) = self.connection.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }

        if let Some(identity) = &self.connection.identity_file {
            args.push("-i".to_string());
            args.push(identity.to_string_lossy().to_string());
        }

        args.push(self.target());
        args.push(self.remote_command(command));
        args
    }
}

impl RemoteExecutor for SshExecutor {
    fn run(&mut self, command: &str, collect_output: bool) -> Result<RemoteOutput> {
        let target = self.target();
        tracing::debug!("Running on {}: {}", target, command);
        self.history.push(command.to_string());

        let mut cmd = Command::new("ssh");
        cmd.args(self.ssh_args(command));
        let output = run_process(cmd, command, collect_output)?;

        if output.exit_code == Some(SSH_ERROR_STATUS) {
            return Err(GangwayError::RemoteUnreachable {
                host: target,
                command: command.to_string(),
                message: output.stderr.trim().to_string(),
            });
        }

        Ok(output)
    }

    fn history(&self) -> &[String] {
        &self.history
    }

    fn target(&self) -> String {
        self.connection
            .destination()
            .unwrap_or_else(|| "localhost".to_string())
    }
}
