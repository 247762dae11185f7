//! Source control tools the application is deployed with.
//!
//! A [`SourceControl`] knows its binary name and how to ask the server
//! whether that binary works. The readiness check only looks at the exit
//! status of that health check.

use crate::config::{ScmConfig, ScmKind};
use crate::error::Result;
use crate::remote::{RemoteExecutor, RemoteOutput};

/// A source control tool that must be present on the server.
pub trait SourceControl {
    /// Binary name, used verbatim in diagnostics (e.g. `git`).
    fn binary(&self) -> &str;

    /// Lightweight command proving the binary is installed.
    fn check_command(&self) -> String {
        format!("{} --version", self.binary())
    }

    /// Run the health check command on the server.
    fn health_check(&self, remote: &mut dyn RemoteExecutor) -> Result<RemoteOutput> {
        remote.run(&self.check_command(), false)
    }
}

/// Git.
#[derive(Debug, Clone)]
pub struct Git {
    binary: String,
}

impl Default for Git {
    fn default() -> Self {
        Self {
            binary: "git".to_string(),
        }
    }
}

impl SourceControl for Git {
    fn binary(&self) -> &str {
        &self.binary
    }
}

/// Subversion.
#[derive(Debug, Clone)]
pub struct Svn {
    binary: String,
}

impl Default for Svn {
    fn default() -> Self {
        Self {
            binary: "svn".to_string(),
        }
    }
}

impl SourceControl for Svn {
    fn binary(&self) -> &str {
        &self.binary
    }

    // `svn --version` also prints the repository access modules; quiet keeps it short.
    fn check_command(&self) -> String {
        format!("{} --version --quiet", self.binary)
    }
}

/// Build the source control described by the config.
pub fn from_config(config: &ScmConfig) -> Box<dyn SourceControl> {
    match config.kind {
        ScmKind::Git => {
            let mut git = Git::default();
            if let Some(binary) = &config.binary {
                git.binary = binary.clone();
            }
            Box::new(git)
        }
        ScmKind::Svn => {
            let mut svn = Svn::default();
            if let Some(binary) = &config.binary {
                svn.binary = binary.clone();
            }
            Box::new(svn)
        }
    }
}
