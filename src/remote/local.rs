//! Executor for checking the machine Gangway runs on.

use std::path::PathBuf;

use crate::error::Result;

use super::shell::{run_process, shell_command};
use super::{RemoteExecutor, RemoteOutput};

/// Runs commands through the local shell.
#[derive(Debug, Default)]
pub struct LocalExecutor {
    root: Option<PathBuf>,
    history: Vec<String>,
}

impl LocalExecutor {
    /// Create an executor that runs commands from `root` (or the current directory).
    pub fn new(root: Option<String>) -> Self {
        Self {
            root: root.map(PathBuf::from),
            ..Default::default()
        }
    }
}

impl RemoteExecutor for LocalExecutor {
    fn run(&mut self, command: &str, collect_output: bool) -> Result<RemoteOutput> {
        tracing::debug!("Running locally: {}", command);
        self.history.push(command.to_string());

        let cmd = shell_command(command, self.root.as_deref());
        run_process(cmd, command, collect_output)
    }

    fn history(&self) -> &[String] {
        &self.history
    }

    fn target(&self) -> String {
        "localhost".to_string()
    }
}
