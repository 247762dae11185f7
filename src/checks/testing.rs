//! Scripted executor for check tests.

use std::collections::HashMap;

use crate::error::{GangwayError, Result};
use crate::remote::{RemoteExecutor, RemoteOutput};

/// Executor that answers from a script and records every command.
///
/// Unscripted commands exit 127 with no output, like a missing binary.
#[derive(Debug, Default)]
pub struct StubRemote {
    responses: HashMap<String, RemoteOutput>,
    unreachable: Option<String>,
    calls: Vec<String>,
}

impl StubRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with `code` and `stdout`.
    pub fn respond(mut self, command: &str, code: i32, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), RemoteOutput::with_status(code, stdout));
        self
    }

    /// Fail `command` as if the connection dropped.
    pub fn unreachable_on(mut self, command: &str) -> Self {
        self.unreachable = Some(command.to_string());
        self
    }

    /// How many times `command` was run.
    pub fn count(&self, command: &str) -> usize {
        self.calls.iter().filter(|c| *c == command).count()
    }
}

impl RemoteExecutor for StubRemote {
    fn run(&mut self, command: &str, _collect_output: bool) -> Result<RemoteOutput> {
        self.calls.push(command.to_string());

        if self.unreachable.as_deref() == Some(command) {
            return Err(GangwayError::RemoteUnreachable {
                host: self.target(),
                command: command.to_string(),
                message: "Connection reset by peer".to_string(),
            });
        }

        Ok(self
            .responses
            .get(command)
            .cloned()
            .unwrap_or_else(|| RemoteOutput::with_status(127, "")))
    }

    fn history(&self) -> &[String] {
        &self.calls
    }

    fn target(&self) -> String {
        "stub@example.com".to_string()
    }
}
