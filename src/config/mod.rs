//! Configuration loading, parsing, and validation for Gangway.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//! - Dotted-key application value lookup in [`lookup`]
//!
//! # Example
//!
//! ```
//! use gangway::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".gangway");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "connection:\n  host: example.com\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.connection.host.as_deref(), Some("example.com"));
//! ```
//!
//! # Configuration File Locations
//!
//! Gangway discovers and merges configuration in this order:
//! 1. Project config (`.gangway/config.yml`)
//! 2. Local overrides (`.gangway/config.local.yml`)

pub mod loader;
pub mod lookup;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{
    ConnectionConfig, GangwayConfig, PackageManagerConfig, RuntimeConfig, ScmConfig, ScmKind,
    DEFAULT_MINIMUM_VERSION,
};

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    ConfigPaths, CONFIG_DIR,
};

pub use lookup::{ApplicationValues, ConfigLookup};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};
