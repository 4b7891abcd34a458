//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--db`, `--memory`, `--strict`)
//! 2. Environment variables (`LOJA_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

use loja_store::FailurePolicy;

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in listings.
    pub store_name: String,

    /// Database file. `None` means the platform data directory.
    pub db_path: Option<PathBuf>,

    /// Keep everything in memory; nothing survives the process.
    pub in_memory: bool,

    /// How storage failures are reported.
    #[serde(serialize_with = "serialize_policy")]
    pub failure_policy: FailurePolicy,
}

fn serialize_policy<S: serde::Serializer>(policy: &FailurePolicy, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(policy)
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Loja".to_string(),
            db_path: None,
            in_memory: false,
            failure_policy: FailurePolicy::Lenient,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LOJA_DB_PATH`: database file
    /// - `LOJA_FAILURE_POLICY`: `lenient` or `strict`
    /// - `LOJA_STORE_NAME`: store name
    pub fn from_env() -> Self {
        ConfigState::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an explicit variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("LOJA_DB_PATH").filter(|p| !p.is_empty()) {
            config.db_path = Some(PathBuf::from(path));
        }

        if let Some(policy) = lookup("LOJA_FAILURE_POLICY") {
            match policy.parse::<FailurePolicy>() {
                Ok(policy) => config.failure_policy = policy,
                Err(e) => warn!(error = %e, "Ignoring LOJA_FAILURE_POLICY"),
            }
        }

        if let Some(store_name) = lookup("LOJA_STORE_NAME") {
            config.store_name = store_name;
        }

        config
    }

    /// Applies command line flags on top of the loaded configuration.
    pub fn with_overrides(mut self, db: Option<PathBuf>, memory: bool, strict: bool) -> Self {
        if let Some(path) = db {
            self.db_path = Some(path);
        }
        if memory {
            self.in_memory = true;
        }
        if strict {
            self.failure_policy = FailurePolicy::Strict;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_vars(vars(&[]));
        assert_eq!(config.failure_policy, FailurePolicy::Lenient);
        assert!(config.db_path.is_none());
        assert!(!config.in_memory);
    }

    #[test]
    fn test_environment() {
        let config = ConfigState::from_vars(vars(&[
            ("LOJA_DB_PATH", "/data/loja.db"),
            ("LOJA_FAILURE_POLICY", "strict"),
            ("LOJA_STORE_NAME", "Mercadinho"),
        ]));
        assert_eq!(config.db_path, Some(PathBuf::from("/data/loja.db")));
        assert_eq!(config.failure_policy, FailurePolicy::Strict);
        assert_eq!(config.store_name, "Mercadinho");
    }

    #[test]
    fn test_bad_policy_keeps_default() {
        let config = ConfigState::from_vars(vars(&[("LOJA_FAILURE_POLICY", "sometimes")]));
        assert_eq!(config.failure_policy, FailurePolicy::Lenient);
    }

    #[test]
    fn test_flags_win() {
        let config = ConfigState::from_vars(vars(&[("LOJA_DB_PATH", "/env.db")]))
            .with_overrides(Some(PathBuf::from("/flag.db")), true, true);
        assert_eq!(config.db_path, Some(PathBuf::from("/flag.db")));
        assert!(config.in_memory);
        assert_eq!(config.failure_policy, FailurePolicy::Strict);

        let untouched = ConfigState::default().with_overrides(None, false, false);
        assert_eq!(untouched.failure_policy, FailurePolicy::Lenient);
    }

    #[test]
    fn test_serializes_policy_as_text() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["failurePolicy"], "lenient");
        assert_eq!(json["inMemory"], false);
    }
}
