//! Locating Composer on the server.

use crate::error::Result;
use crate::remote::RemoteExecutor;

/// Finds a usable package manager on the server.
pub trait PackageManagerResolver {
    /// The command to invoke the package manager with, or `None` if there is none.
    fn resolve(&self, remote: &mut dyn RemoteExecutor) -> Result<Option<String>>;
}

/// Resolves Composer: a global binary first, then a `composer.phar` in the
/// application root.
#[derive(Debug, Clone)]
pub struct ComposerResolver {
    binary: String,
    php: String,
}

impl ComposerResolver {
    /// Create a resolver for `binary`, running a local phar with `php`.
    pub fn new(binary: impl Into<String>, php: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            php: php.into(),
        }
    }
}

impl PackageManagerResolver for ComposerResolver {
    fn resolve(&self, remote: &mut dyn RemoteExecutor) -> Result<Option<String>> {
        let which = remote.run(&format!("which {}", self.binary), true)?;
        if which.success() && !which.text().is_empty() {
            return Ok(Some(which.text().to_string()));
        }

        let phar = remote.run("test -f composer.phar", false)?;
        if phar.success() {
            return Ok(Some(format!("{} composer.phar", self.php)));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::StubRemote;

    fn resolver() -> ComposerResolver {
        ComposerResolver::new("composer", "php")
    }

    #[test]
    fn finds_global_binary() {
        let mut remote = StubRemote::new().respond("which composer", 0, "/usr/local/bin/composer\n");
        let found = resolver().resolve(&mut remote).unwrap();
        assert_eq!(found.as_deref(), Some("/usr/local/bin/composer"));
        assert_eq!(remote.count("test -f composer.phar"), 0);
    }

    #[test]
    fn falls_back_to_local_phar() {
        let mut remote = StubRemote::new()
            .respond("which composer", 1, "")
            .respond("test -f composer.phar", 0, "");
        let found = resolver().resolve(&mut remote).unwrap();
        assert_eq!(found.as_deref(), Some("php composer.phar"));
    }

    #[test]
    fn none_when_neither_exists() {
        let mut remote = StubRemote::new();
        assert!(resolver().resolve(&mut remote).unwrap().is_none());
    }

    #[test]
    fn which_with_empty_output_is_not_found() {
        let mut remote = StubRemote::new().respond("which composer", 0, "");
        assert!(resolver().resolve(&mut remote).unwrap().is_none());
    }

    #[test]
    fn transport_failure_propagates() {
        let mut remote = StubRemote::new().unreachable_on("which composer");
        assert!(resolver().resolve(&mut remote).is_err());
    }
}
