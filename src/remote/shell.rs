//! Local process execution shared by the executors.

use crate::error::{GangwayError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use super::RemoteOutput;

/// Run a prepared [`Command`], optionally capturing stdout.
///
/// Stderr is always captured so transport errors can be reported.
/// `command_line` is the command as shown in error messages.
pub fn run_process(
    mut cmd: Command,
    command_line: &str,
    collect_output: bool,
) -> Result<RemoteOutput> {
    let start = Instant::now();

    cmd.stdin(Stdio::null());
    cmd.stderr(Stdio::piped());
    if collect_output {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::null());
    }

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to spawn '{}': {}", command_line, e);
        GangwayError::CommandFailed {
            command: command_line.to_string(),
        }
    })?;

    let stdout = if collect_output {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    Ok(RemoteOutput {
        exit_code: output.status.code(),
        stdout,
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
    })
}

/// Build a command that runs `command` through the local shell.
pub fn shell_command(command: &str, cwd: Option<&Path>) -> Command {
    let shell = detect_shell();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    cmd
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
///
/// Uses `-lc` (login, non-interactive) on Unix so version managers set up in
/// the login profile (phpenv, phpbrew) are on PATH.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-lc"
    }
}

/// Quote a string for a POSIX shell.
///
/// Wraps in single quotes, with embedded single quotes written as `'\''`.
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
