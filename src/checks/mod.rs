//! Deployment readiness checks.
//!
//! A run has two phases:
//!
//! 1. [`build_registry`] turns the static prerequisites (source control,
//!    PHP version, Composer, mcrypt) and the application's configured
//!    database, cache and session drivers into an ordered [`CheckRegistry`].
//! 2. [`CheckRunner`] runs every entry against the server, collects every
//!    failure, and reports them together.
//!
//! ```
//! use gangway::checks::{build_registry, CheckId};
//! use gangway::scm::Git;
//! use std::collections::HashMap;
//!
//! let mut app = HashMap::new();
//! app.insert("database.default".to_string(), "sqlite".to_string());
//!
//! let registry = build_registry(&app, &Git::default(), "5.3.7");
//! assert_eq!(registry.len(), 7);
//! assert_eq!(registry.iter().next().map(|s| s.id), Some(CheckId::Scm));
//! ```

pub mod extensions;
pub mod package_manager;
pub mod registry;
pub mod runner;
pub mod version;

#[cfg(test)]
pub(crate) mod testing;

pub use extensions::ExtensionCache;
pub use package_manager::{ComposerResolver, PackageManagerResolver};
pub use registry::{build_registry, CheckId, CheckRegistry, CheckSpec};
pub use runner::{CheckOutcome, CheckResult, CheckRunner, READY_MESSAGE};
pub use version::version_satisfies;
