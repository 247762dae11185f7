//! Gangway - deployment readiness checks for PHP application servers.
//!
//! Gangway connects to the server an application is about to be deployed
//! to and verifies that it has everything the deploy needs: source control,
//! a recent enough PHP, Composer, and the PHP extensions required by the
//! application's configured database, cache and session drivers. Every
//! failing prerequisite is reported at once.
//!
//! # Modules
//!
//! - [`checks`] - Check registry, runner, and the individual checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`remote`] - Command execution over SSH or locally
//! - [`scm`] - Source control tools
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use gangway::checks::version_satisfies;
//!
//! assert!(version_satisfies("5.5.0", "5.3.7"));
//! assert!(!version_satisfies("5.3.6", "5.3.7"));
//! ```
//!
//! For running checks against a server, see the integration tests.

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod remote;
pub mod scm;
pub mod ui;

pub use error::{GangwayError, Result};
