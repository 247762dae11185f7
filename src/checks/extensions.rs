//! Installed PHP extensions and the extensions each driver needs.

use std::collections::HashSet;

use crate::error::Result;
use crate::remote::RemoteExecutor;

/// Extensions loaded by the server's PHP, fetched at most once per run.
///
/// The listing (`php -m`) is the slowest thing a run does, and several
/// checks need it, so the first check to ask populates the cache and
/// later checks reuse it.
#[derive(Debug, Clone, Default)]
pub struct ExtensionCache {
    loaded: bool,
    names: HashSet<String>,
}

impl ExtensionCache {
    /// An empty, not-yet-loaded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the listing has been fetched this run.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Forget the listing so the next lookup fetches it again.
    pub fn reset(&mut self) {
        self.loaded = false;
        self.names.clear();
    }

    /// Check membership, running `list_command` on the server first if needed.
    pub fn contains(
        &mut self,
        extension: &str,
        remote: &mut dyn RemoteExecutor,
        list_command: &str,
    ) -> Result<bool> {
        if !self.is_loaded() {
            let output = remote.run(list_command, true)?;
            self.names = parse_extension_list(&output.stdout);
            self.loaded = true;
            tracing::debug!("Server reports {} PHP extensions", self.names.len());
        }
        Ok(self.names.contains(extension))
    }
}

/// Split `php -m` output into extension names.
pub fn parse_extension_list(output: &str) -> HashSet<String> {
    output.split_whitespace().map(str::to_string).collect()
}

/// Extensions the database driver needs.
///
/// Unrecognized drivers (including an empty one) need nothing.
pub fn database_driver_extensions(driver: &str) -> &'static [&'static str] {
    match driver {
        "sqlite" => &["pdo_sqlite"],
        "mysql" => &["mysql", "pdo_mysql"],
        _ => &[],
    }
}

/// Extension a cache or session driver needs, if any.
pub fn cache_driver_extension(driver: &str) -> Option<&str> {
    match driver {
        "memcached" | "apc" | "redis" => Some(driver),
        _ => None,
    }
}
