//! Check command implementation.
//!
//! The `gangway check` command runs every deployment prerequisite check
//! against the configured server and reports all failures at once.

use std::path::{Path, PathBuf};

use crate::checks::{build_registry, CheckOutcome, CheckRunner, ComposerResolver};
use crate::cli::args::CheckArgs;
use crate::config::{load_config, validate, ApplicationValues, GangwayConfig};
use crate::error::{GangwayError, Result};
use crate::remote::{self, RemoteExecutor};
use crate::scm;
use crate::ui::{create_ui, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: None,
            args,
        }
    }

    /// Load configuration from `path` only.
    pub fn with_config_override(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    fn run_checks(
        &self,
        config: &GangwayConfig,
        remote: &mut dyn RemoteExecutor,
        ui: &mut dyn UserInterface,
    ) -> Result<CheckOutcome> {
        let application = ApplicationValues::new(config.application.clone());
        let scm = scm::from_config(&config.scm);
        let resolver =
            ComposerResolver::new(&config.package_manager.binary, &config.runtime.binary);

        let registry = build_registry(&application, scm.as_ref(), &config.runtime.minimum_version)
            .without(&self.args.skip);

        let mut runner = CheckRunner::new(remote, scm.as_ref(), &resolver, config.runtime.clone(), ui);
        if self.args.json {
            runner.evaluate(&registry)
        } else {
            runner.run(&registry)
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_override.as_deref()) {
            Ok(c) => c,
            Err(GangwayError::ConfigNotFound { .. }) => {
                ui.error("No configuration found. Create .gangway/config.yml first.");
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };
        validate(&config)?;

        let mut remote = remote::connect(&config.connection);
        tracing::debug!("Checking {}", remote.target());

        if !self.args.skip.is_empty() && !self.args.json {
            let names: Vec<&str> = self.args.skip.iter().map(|id| id.name()).collect();
            ui.warning(&format!("Skipping checks: {}", names.join(", ")));
        }

        let outcome = if self.args.json {
            // Progress comments would corrupt the JSON document.
            let mut silent = create_ui(OutputMode::Silent);
            let outcome = self.run_checks(&config, remote.as_mut(), silent.as_mut())?;

            let json = serde_json::to_string_pretty(&outcome.to_json())
                .map_err(|e| GangwayError::Other(e.into()))?;
            ui.message(&json);
            outcome
        } else {
            self.run_checks(&config, remote.as_mut(), ui)?
        };

        // The JSON document is the whole of stdout.
        if !self.args.json && ui.output_mode().shows_command_history() {
            for command in remote.history() {
                ui.command(command);
            }
        }

        if outcome.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
