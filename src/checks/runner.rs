//! Running a registry of checks against the server.
//!
//! Every check runs exactly once, in registry order, whether or not earlier
//! checks failed; the operator gets the full list of missing prerequisites
//! in one report. A check operation returns `Ok(false)` when something is
//! missing. `Err` is reserved for transport failures, which abort the run.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::remote::RemoteExecutor;
use crate::scm::SourceControl;
use crate::ui::UserInterface;

use super::extensions::{cache_driver_extension, database_driver_extensions, ExtensionCache};
use super::package_manager::PackageManagerResolver;
use super::registry::{CheckId, CheckRegistry, CheckSpec};
use super::version::version_satisfies;

/// Confirmation shown when every check passes.
pub const READY_MESSAGE: &str = "Your server is ready to deploy";

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub check: CheckId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub target: String,
    pub checked_at: DateTime<Utc>,
    pub results: Vec<CheckResult>,
}

impl CheckOutcome {
    fn new(target: String) -> Self {
        Self {
            target,
            checked_at: Utc::now(),
            results: Vec::new(),
        }
    }

    fn record(&mut self, spec: &CheckSpec, passed: bool) {
        self.results.push(CheckResult {
            check: spec.id,
            argument: spec.argument.clone(),
            passed,
            message: (!passed).then(|| spec.message.clone()),
        });
    }

    /// Failure messages in the order the checks ran.
    pub fn failures(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter_map(|r| r.message.as_deref())
            .collect()
    }

    /// Whether no check failed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Failure messages, one per line.
    pub fn report(&self) -> String {
        self.failures().join("\n")
    }

    /// JSON form, including the derived `passed` flag.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "passed": self.passed(),
            "target": self.target,
            "checked_at": self.checked_at,
            "results": self.results,
            "failures": self.failures(),
        })
    }
}

/// Runs checks against one server and owns the per-run extension cache.
pub struct CheckRunner<'a> {
    remote: &'a mut dyn RemoteExecutor,
    scm: &'a dyn SourceControl,
    package_manager: &'a dyn PackageManagerResolver,
    runtime: RuntimeConfig,
    ui: &'a mut dyn UserInterface,
    extensions: ExtensionCache,
}

impl<'a> CheckRunner<'a> {
    pub fn new(
        remote: &'a mut dyn RemoteExecutor,
        scm: &'a dyn SourceControl,
        package_manager: &'a dyn PackageManagerResolver,
        runtime: RuntimeConfig,
        ui: &'a mut dyn UserInterface,
    ) -> Self {
        Self {
            remote,
            scm,
            package_manager,
            runtime,
            ui,
            extensions: ExtensionCache::new(),
        }
    }

    /// Run every check, then report the outcome through the UI.
    ///
    /// On failure a single error is shown with every failure message on its
    /// own line. On success a single confirmation is shown.
    pub fn run(&mut self, registry: &CheckRegistry) -> Result<CheckOutcome> {
        let outcome = self.evaluate(registry)?;

        if outcome.passed() {
            self.ui.info(READY_MESSAGE);
        } else {
            self.ui.error(&outcome.report());
        }

        Ok(outcome)
    }

    /// Run every check without the final report.
    ///
    /// The extension cache is cleared first, so a runner can be reused.
    pub fn evaluate(&mut self, registry: &CheckRegistry) -> Result<CheckOutcome> {
        self.extensions.reset();
        let mut outcome = CheckOutcome::new(self.remote.target());

        for spec in registry {
            let check = Self::operation(spec.id);
            tracing::debug!("Running check {} ({:?})", spec.id, spec.argument);

            let passed = check(self, spec.argument.as_deref())?;
            if !passed {
                tracing::debug!("Check {} failed: {}", spec.id, spec.message);
            }
            outcome.record(spec, passed);
        }

        tracing::info!(
            "{} checks run against {}, {} failed",
            outcome.results.len(),
            outcome.target,
            outcome.failures().len()
        );
        Ok(outcome)
    }

    /// The operation implementing a check.
    fn operation(id: CheckId) -> fn(&mut Self, Option<&str>) -> Result<bool> {
        match id {
            CheckId::Scm => Self::check_scm,
            CheckId::RuntimeVersion => Self::check_runtime_version,
            CheckId::PackageManager => Self::check_package_manager,
            CheckId::Extension => Self::check_extension,
            CheckId::DatabaseDriver => Self::check_database_driver,
            CheckId::CacheDriver | CheckId::SessionDriver => Self::check_cache_driver,
        }
    }

    fn check_scm(&mut self, _argument: Option<&str>) -> Result<bool> {
        self.ui
            .comment(&format!("Checking presence of {}", self.scm.binary()));
        let output = self.scm.health_check(&mut *self.remote)?;
        Ok(output.success())
    }

    fn check_runtime_version(&mut self, _argument: Option<&str>) -> Result<bool> {
        self.ui.comment("Checking PHP version");
        let command = format!("{} -r \"print PHP_VERSION;\"", self.runtime.binary);
        let output = self.remote.run(&command, true)?;

        // Notices printed before the version must not be mistaken for it.
        let version = output
            .text()
            .lines()
            .map(str::trim)
            .rfind(|line| !line.is_empty())
            .unwrap_or_default();
        tracing::debug!("Server PHP version: {:?}", version);
        Ok(output.success() && version_satisfies(version, &self.runtime.minimum_version))
    }

    fn check_package_manager(&mut self, _argument: Option<&str>) -> Result<bool> {
        self.ui.comment("Checking presence of Composer");
        let found = self.package_manager.resolve(&mut *self.remote)?;
        if let Some(command) = &found {
            tracing::debug!("Composer available as {}", command);
        }
        Ok(found.is_some())
    }

    fn check_extension(&mut self, argument: Option<&str>) -> Result<bool> {
        let extension = argument.unwrap_or_default();
        self.ui
            .comment(&format!("Checking presence of {} extension", extension));

        let list_command = format!("{} -m", self.runtime.binary);
        self.extensions
            .contains(extension, &mut *self.remote, &list_command)
    }

    fn check_database_driver(&mut self, argument: Option<&str>) -> Result<bool> {
        for extension in database_driver_extensions(argument.unwrap_or_default()) {
            if !self.check_extension(Some(extension))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn check_cache_driver(&mut self, argument: Option<&str>) -> Result<bool> {
        match cache_driver_extension(argument.unwrap_or_default()) {
            Some(extension) => self.check_extension(Some(extension)),
            None => Ok(true),
        }
    }
}
