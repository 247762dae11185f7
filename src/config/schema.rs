//! Configuration schema definitions for Gangway.
//!
//! This module contains all the struct definitions that map to
//! the YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default minimum PHP version a server must run.
pub const DEFAULT_MINIMUM_VERSION: &str = "5.3.7";

/// Root configuration structure for `.gangway/config.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GangwayConfig {
    /// How to reach the server being checked
    pub connection: ConnectionConfig,

    /// Source control used to deploy the application
    pub scm: ScmConfig,

    /// PHP runtime on the server
    pub runtime: RuntimeConfig,

    /// Composer settings
    pub package_manager: PackageManagerConfig,

    /// Application configuration values (`database.default`, `cache.driver`, ...)
    ///
    /// Kept as raw YAML so arbitrary nested keys can be looked up by dotted path.
    #[serde(skip_serializing_if = "serde_yaml::Value::is_null")]
    pub application: serde_yaml::Value,
}

/// Connection to the target server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Run commands on this machine instead of over SSH
    #[serde(default, skip_serializing_if = "is_false")]
    pub local: bool,

    /// Hostname or IP of the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// SSH user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// SSH port
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Private key passed to `ssh -i`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_file: Option<PathBuf>,

    /// Directory commands are run from on the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    /// Seconds before giving up on the SSH handshake
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            local: false,
            host: None,
            user: None,
            port: None,
            identity_file: None,
            root: None,
            connect_timeout: default_connect_timeout(),
        }
    }
}

impl ConnectionConfig {
    /// `user@host` (or just `host`) as passed to ssh.
    pub fn destination(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        Some(match &self.user {
            Some(user) => format!("{}@{}", user, host),
            None => host.to_string(),
        })
    }
}

/// Source control kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScmKind {
    #[default]
    Git,
    Svn,
}

/// Source control settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScmConfig {
    pub kind: ScmKind,

    /// Override the binary name (e.g. a wrapper script)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<String>,
}

/// PHP runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// PHP binary on the server
    pub binary: String,

    /// Lowest acceptable PHP version
    pub minimum_version: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            binary: "php".to_string(),
            minimum_version: DEFAULT_MINIMUM_VERSION.to_string(),
        }
    }
}

/// Composer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageManagerConfig {
    /// Composer binary looked up on the server's PATH
    pub binary: String,
}

impl Default for PackageManagerConfig {
    fn default() -> Self {
        Self {
            binary: "composer".to_string(),
        }
    }
}

fn default_connect_timeout() -> u64 {
    10
}

fn is_false(b: &bool) -> bool {
    !*b
}
