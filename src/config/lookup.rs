//! Dotted-key lookup of application configuration values.
//!
//! The checks only ever need a handful of string values from the
//! application's own configuration (`database.default`, `cache.driver`,
//! `session.driver`). They read them through [`ConfigLookup`] so tests can
//! hand in a plain map.
//!
//! # Example
//!
//! ```
//! use gangway::config::{ApplicationValues, ConfigLookup};
//!
//! let yaml: serde_yaml::Value =
//!     serde_yaml::from_str("database:\n  default: mysql\n").unwrap();
//! let values = ApplicationValues::with_overrides(yaml, Default::default());
//!
//! assert_eq!(values.get("database.default").as_deref(), Some("mysql"));
//! assert_eq!(values.get("cache.driver"), None);
//! ```

use std::collections::HashMap;

use serde_yaml::Value;

/// Prefix for environment variables that override application values.
pub const ENV_PREFIX: &str = "GANGWAY_";

/// Read-only access to named configuration values.
pub trait ConfigLookup {
    /// Get the value stored under a dotted key, if any.
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigLookup for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Application values from the `application:` config section, with
/// `GANGWAY_*` environment overrides layered on top.
///
/// `database.default` is overridden by `GANGWAY_DATABASE_DEFAULT`.
#[derive(Debug, Clone)]
pub struct ApplicationValues {
    root: Value,
    env_overrides: HashMap<String, String>,
}

impl ApplicationValues {
    /// Create from the config section, collecting overrides from the process environment.
    pub fn new(root: Value) -> Self {
        let env_overrides = std::env::vars()
            .filter(|(k, _)| k.starts_with(ENV_PREFIX))
            .collect();
        Self {
            root,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(root: Value, env_overrides: HashMap<String, String>) -> Self {
        Self {
            root,
            env_overrides,
        }
    }

    fn lookup_path(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
    }
}

/// `database.default` → `GANGWAY_DATABASE_DEFAULT`
pub fn env_key(key: &str) -> String {
    format!("{}{}", ENV_PREFIX, key.replace('.', "_").to_uppercase())
}

impl ConfigLookup for ApplicationValues {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(value) = self.env_overrides.get(&env_key(key)) {
            return Some(value.clone());
        }

        match self.lookup_path(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(yaml: &str) -> ApplicationValues {
        ApplicationValues::with_overrides(serde_yaml::from_str(yaml).unwrap(), HashMap::new())
    }

    #[test]
    fn reads_nested_string() {
        let v = values("cache:\n  driver: redis\n");
        assert_eq!(v.get("cache.driver").as_deref(), Some("redis"));
    }

    #[test]
    fn missing_key_is_none() {
        let v = values("cache:\n  driver: redis\n");
        assert_eq!(v.get("session.driver"), None);
        assert_eq!(v.get("cache.driver.name"), None);
    }

    #[test]
    fn non_scalar_is_none() {
        let v = values("database:\n  connections:\n    - mysql\n");
        assert_eq!(v.get("database.connections"), None);
        assert_eq!(v.get("database"), None);
    }

    #[test]
    fn scalars_are_stringified() {
        let v = values("session:\n  lifetime: 120\n  secure: true\n");
        assert_eq!(v.get("session.lifetime").as_deref(), Some("120"));
        assert_eq!(v.get("session.secure").as_deref(), Some("true"));
    }

    #[test]
    fn null_root_yields_nothing() {
        let v = ApplicationValues::with_overrides(Value::Null, HashMap::new());
        assert_eq!(v.get("database.default"), None);
    }

    #[test]
    fn env_override_wins_over_file_value() {
        let mut overrides = HashMap::new();
        overrides.insert("GANGWAY_DATABASE_DEFAULT".to_string(), "sqlite".to_string());
        let v = ApplicationValues::with_overrides(
            serde_yaml::from_str("database:\n  default: mysql\n").unwrap(),
            overrides,
        );
        assert_eq!(v.get("database.default").as_deref(), Some("sqlite"));
    }

    #[test]
    fn env_key_uppercases_and_replaces_dots() {
        assert_eq!(env_key("session.driver"), "GANGWAY_SESSION_DRIVER");
    }

    #[test]
    fn hashmap_lookup() {
        let mut map = HashMap::new();
        map.insert("cache.driver".to_string(), "apc".to_string());
        assert_eq!(ConfigLookup::get(&map, "cache.driver").as_deref(), Some("apc"));
        assert_eq!(ConfigLookup::get(&map, "session.driver"), None);
    }
}
