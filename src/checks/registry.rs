//! The list of checks a run performs.
//!
//! Checks are identified by [`CheckId`], a closed set: every id has exactly
//! one operation in the runner, so a registry can never name a check that
//! does not exist. Names coming from outside (the `--skip` flag) are parsed
//! into ids up front and rejected if unknown.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::ConfigLookup;
use crate::error::GangwayError;
use crate::scm::SourceControl;

/// Extension every application needs regardless of drivers.
pub const REQUIRED_EXTENSION: &str = "mcrypt";

/// Config keys naming the active drivers.
pub const DATABASE_DRIVER_KEY: &str = "database.default";
pub const CACHE_DRIVER_KEY: &str = "cache.driver";
pub const SESSION_DRIVER_KEY: &str = "session.driver";

/// A check operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    /// Source control binary responds.
    Scm,
    /// PHP is at least the minimum version.
    RuntimeVersion,
    /// Composer can be found.
    PackageManager,
    /// A named extension is loaded.
    Extension,
    /// Extensions for the database driver are loaded.
    DatabaseDriver,
    /// Extension for the cache driver is loaded.
    CacheDriver,
    /// Extension for the session driver is loaded.
    SessionDriver,
}

impl CheckId {
    /// Every check, in registry order.
    pub const ALL: [CheckId; 7] = [
        CheckId::Scm,
        CheckId::RuntimeVersion,
        CheckId::PackageManager,
        CheckId::Extension,
        CheckId::DatabaseDriver,
        CheckId::CacheDriver,
        CheckId::SessionDriver,
    ];

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            CheckId::Scm => "scm",
            CheckId::RuntimeVersion => "runtime_version",
            CheckId::PackageManager => "package_manager",
            CheckId::Extension => "extension",
            CheckId::DatabaseDriver => "database_driver",
            CheckId::CacheDriver => "cache_driver",
            CheckId::SessionDriver => "session_driver",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CheckId {
    type Err = GangwayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        CheckId::ALL
            .into_iter()
            .find(|id| id.name() == wanted)
            .ok_or_else(|| GangwayError::UnknownCheck {
                name: s.to_string(),
            })
    }
}

/// One check to run: which operation, its argument, and the message shown if it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSpec {
    pub id: CheckId,
    pub argument: Option<String>,
    pub message: String,
}

impl CheckSpec {
    /// A check without an argument.
    pub fn new(id: CheckId, message: impl Into<String>) -> Self {
        Self {
            id,
            argument: None,
            message: message.into(),
        }
    }

    /// A check with an argument.
    pub fn with_argument(id: CheckId, argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            argument: Some(argument.into()),
            message: message.into(),
        }
    }
}

/// Ordered checks for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRegistry {
    specs: Vec<CheckSpec>,
}

impl CheckRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check.
    pub fn push(&mut self, spec: CheckSpec) {
        self.specs.push(spec);
    }

    /// Drop every check whose id is in `skip`.
    pub fn without(mut self, skip: &[CheckId]) -> Self {
        self.specs.retain(|spec| !skip.contains(&spec.id));
        self
    }

    /// Iterate the checks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CheckSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl FromIterator<CheckSpec> for CheckRegistry {
    fn from_iter<I: IntoIterator<Item = CheckSpec>>(iter: I) -> Self {
        Self {
            specs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CheckRegistry {
    type Item = &'a CheckSpec;
    type IntoIter = std::slice::Iter<'a, CheckSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}

/// Failure message for a missing extension.
pub fn extension_message(extension: &str) -> String {
    format!(
        "The {} extension does not seem to be loaded on the server",
        extension
    )
}

/// Build the checks for one run from static rules and the application config.
///
/// Driver values that are missing become empty arguments, which every driver
/// check treats as "nothing required". The cache and session drivers are
/// checked independently.
pub fn build_registry(
    config: &dyn ConfigLookup,
    scm: &dyn SourceControl,
    minimum_version: &str,
) -> CheckRegistry {
    let database = config.get(DATABASE_DRIVER_KEY).unwrap_or_default();
    let cache = config.get(CACHE_DRIVER_KEY).unwrap_or_default();
    let session = config.get(SESSION_DRIVER_KEY).unwrap_or_default();

    let mut registry = CheckRegistry::new();
    registry.push(CheckSpec::new(
        CheckId::Scm,
        format!("{} could not be found", scm.binary()),
    ));
    registry.push(CheckSpec::new(
        CheckId::RuntimeVersion,
        format!(
            "The version of PHP on the server does not match the minimum requirement ({})",
            minimum_version
        ),
    ));
    registry.push(CheckSpec::new(
        CheckId::PackageManager,
        "Composer does not seem to be present on the server",
    ));
    registry.push(CheckSpec::with_argument(
        CheckId::Extension,
        REQUIRED_EXTENSION,
        extension_message(REQUIRED_EXTENSION),
    ));
    registry.push(CheckSpec::with_argument(
        CheckId::DatabaseDriver,
        database.clone(),
        extension_message(&database),
    ));
    registry.push(CheckSpec::with_argument(
        CheckId::CacheDriver,
        cache.clone(),
        extension_message(&cache),
    ));
    registry.push(CheckSpec::with_argument(
        CheckId::SessionDriver,
        session.clone(),
        extension_message(&session),
    ));

    tracing::debug!(
        "Built {} checks (database={:?}, cache={:?}, session={:?})",
        registry.len(),
        database,
        cache,
        session
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scm::{Git, Svn};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn registry_has_every_check_in_order() {
        let registry = build_registry(&lookup(&[]), &Git::default(), "5.3.7");
        let ids: Vec<CheckId> = registry.iter().map(|s| s.id).collect();
        assert_eq!(ids, CheckId::ALL.to_vec());
    }

    #[test]
    fn identity_checks_have_no_argument() {
        let registry = build_registry(&lookup(&[]), &Git::default(), "5.3.7");
        for spec in registry.iter().take(3) {
            assert!(spec.argument.is_none(), "{} has an argument", spec.id);
        }
    }

    #[test]
    fn scm_message_uses_binary_name() {
        let registry = build_registry(&lookup(&[]), &Svn::default(), "5.3.7");
        let scm = registry.iter().next().unwrap();
        assert_eq!(scm.message, "svn could not be found");
    }

    #[test]
    fn runtime_message_names_minimum() {
        let registry = build_registry(&lookup(&[]), &Git::default(), "5.4.0");
        let runtime = registry.iter().nth(1).unwrap();
        assert!(runtime.message.contains("5.4.0"));
    }

    #[test]
    fn required_extension_is_mcrypt() {
        let registry = build_registry(&lookup(&[]), &Git::default(), "5.3.7");
        let ext = registry.iter().find(|s| s.id == CheckId::Extension).unwrap();
        assert_eq!(ext.argument.as_deref(), Some("mcrypt"));
        assert_eq!(
            ext.message,
            "The mcrypt extension does not seem to be loaded on the server"
        );
    }

    #[test]
    fn driver_arguments_come_from_config() {
        let config = lookup(&[
            ("database.default", "mysql"),
            ("cache.driver", "apc"),
            ("session.driver", "redis"),
        ]);
        let registry = build_registry(&config, &Git::default(), "5.3.7");

        let arg = |id: CheckId| {
            registry
                .iter()
                .find(|s| s.id == id)
                .and_then(|s| s.argument.clone())
        };
        assert_eq!(arg(CheckId::DatabaseDriver).as_deref(), Some("mysql"));
        assert_eq!(arg(CheckId::CacheDriver).as_deref(), Some("apc"));
        assert_eq!(arg(CheckId::SessionDriver).as_deref(), Some("redis"));
    }

    #[test]
    fn cache_and_session_are_separate_entries() {
        let config = lookup(&[("cache.driver", "apc"), ("session.driver", "redis")]);
        let registry = build_registry(&config, &Git::default(), "5.3.7");
        assert!(registry.iter().any(|s| s.message.contains("apc")));
        assert!(registry.iter().any(|s| s.message.contains("redis")));
    }

    #[test]
    fn missing_driver_values_become_empty_arguments() {
        let registry = build_registry(&lookup(&[]), &Git::default(), "5.3.7");
        let db = registry
            .iter()
            .find(|s| s.id == CheckId::DatabaseDriver)
            .unwrap();
        assert_eq!(db.argument.as_deref(), Some(""));
    }

    #[test]
    fn without_drops_skipped_checks() {
        let registry = build_registry(&lookup(&[]), &Git::default(), "5.3.7")
            .without(&[CheckId::Scm, CheckId::PackageManager]);
        assert_eq!(registry.len(), 5);
        assert!(registry.iter().all(|s| s.id != CheckId::Scm));
    }

    #[test]
    fn check_id_round_trips_through_name() {
        for id in CheckId::ALL {
            assert_eq!(id.name().parse::<CheckId>().unwrap(), id);
        }
    }

    #[test]
    fn check_id_accepts_dashes() {
        assert_eq!(
            "runtime-version".parse::<CheckId>().unwrap(),
            CheckId::RuntimeVersion
        );
    }

    #[test]
    fn unknown_check_name_is_an_error() {
        let err = "check_nginx".parse::<CheckId>().unwrap_err();
        assert!(matches!(err, GangwayError::UnknownCheck { ref name } if name == "check_nginx"));
    }
}
