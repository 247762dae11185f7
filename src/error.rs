//! Error types for Gangway operations.
//!
//! This module defines [`GangwayError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A check that finds something missing is *not* an error: check operations
//!   return `Ok(false)` and the runner collects the message
//! - Use `GangwayError` for conditions that must abort a run (bad config,
//!   unreachable host, a command that could not be started)
//! - Use `anyhow::Error` (via `GangwayError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Gangway operations.
#[derive(Debug, Error)]
pub enum GangwayError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A check name that does not correspond to any check operation.
    #[error("Unknown check: {name}")]
    UnknownCheck { name: String },

    /// A command could not be started at all.
    #[error("Could not start '{command}'")]
    CommandFailed { command: String },

    /// The remote host could not be reached to run a command.
    #[error("Could not reach {host} to run '{command}': {message}")]
    RemoteUnreachable {
        host: String,
        command: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Gangway operations.
pub type Result<T> = std::result::Result<T, GangwayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = GangwayError::ConfigNotFound {
            path: PathBuf::from("/foo/.gangway/config.yml"),
        };
        assert!(err.to_string().contains("/foo/.gangway/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = GangwayError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn unknown_check_displays_name() {
        let err = GangwayError::UnknownCheck {
            name: "check_nginx".into(),
        };
        assert!(err.to_string().contains("check_nginx"));
    }

    #[test]
    fn command_failed_names_the_command() {
        let err = GangwayError::CommandFailed {
            command: "php -m".into(),
        };
        assert_eq!(err.to_string(), "Could not start 'php -m'");
    }

    #[test]
    fn remote_unreachable_displays_host_and_command() {
        let err = GangwayError::RemoteUnreachable {
            host: "deploy@example.com".into(),
            command: "git --version".into(),
            message: "Connection refused".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("deploy@example.com"));
        assert!(msg.contains("git --version"));
        assert!(msg.contains("Connection refused"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GangwayError = io_err.into();
        assert!(matches!(err, GangwayError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(GangwayError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
