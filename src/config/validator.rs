//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - A remote connection must name a host
//! - The minimum PHP version must contain a dotted number
//! - Binaries must not be empty

use crate::checks::version::parse_version;
use crate::config::schema::GangwayConfig;
use crate::error::{GangwayError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &GangwayConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !config.connection.local
        && config
            .connection
            .host
            .as_deref()
            .is_none_or(|h| h.trim().is_empty())
    {
        errors.push(ValidationError::new(
            "missing-host",
            "connection.host is required unless connection.local is true",
        ));
    }

    if parse_version(&config.runtime.minimum_version).is_none() {
        errors.push(ValidationError::new(
            "invalid-minimum-version",
            format!(
                "runtime.minimum_version '{}' is not a version number",
                config.runtime.minimum_version
            ),
        ));
    }

    if config.runtime.binary.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-binary",
            "runtime.binary must not be empty",
        ));
    }

    if config.package_manager.binary.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-binary",
            "package_manager.binary must not be empty",
        ));
    }

    errors
}

/// Validate a configuration, returning an error summarizing every problem.
pub fn validate(config: &GangwayConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(GangwayError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_config() -> GangwayConfig {
        let mut config = GangwayConfig::default();
        config.connection.local = true;
        config
    }

    #[test]
    fn local_config_is_valid() {
        assert!(validate(&local_config()).is_ok());
    }

    #[test]
    fn remote_without_host_is_invalid() {
        let config = GangwayConfig::default();
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "missing-host");
    }

    #[test]
    fn blank_host_is_invalid() {
        let mut config = GangwayConfig::default();
        config.connection.host = Some("  ".to_string());
        assert!(validate_config(&config)
            .iter()
            .any(|e| e.rule == "missing-host"));
    }

    #[test]
    fn remote_with_host_is_valid() {
        let mut config = GangwayConfig::default();
        config.connection.host = Some("example.com".to_string());
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn non_numeric_minimum_version_is_invalid() {
        let mut config = local_config();
        config.runtime.minimum_version = "latest".to_string();
        let errors = validate_config(&config);
        assert_eq!(errors[0].rule, "invalid-minimum-version");
    }

    #[test]
    fn collects_every_error() {
        let mut config = GangwayConfig::default();
        config.runtime.minimum_version = "latest".to_string();
        config.runtime.binary = String::new();
        config.package_manager.binary = String::new();

        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("connection.host"));
        assert!(msg.contains("latest"));
        assert!(msg.contains("runtime.binary"));
        assert!(msg.contains("package_manager.binary"));
    }
}
