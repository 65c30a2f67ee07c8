//! Runtime configuration
//!
//! Resolution order: built-in defaults, then the JSON file named by
//! `MUTANT_CONFIG` (if set), then individual environment overrides.

use crate::scanner::ScannerConfig;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "mutant-store.json";

pub const ENV_CONFIG: &str = "MUTANT_CONFIG";
pub const ENV_STORE: &str = "MUTANT_STORE";
pub const ENV_SEQUENCE_LENGTH: &str = "MUTANT_SEQUENCE_LENGTH";
pub const ENV_THRESHOLD: &str = "MUTANT_THRESHOLD";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// JSON file backing the verdict store
    pub store_path: PathBuf,
    pub scanner: ScannerConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            scanner: ScannerConfig::default(),
        }
    }
}

impl DetectorConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (tests pass a map here)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(store) = lookup(ENV_STORE) {
            config.store_path = PathBuf::from(store);
        }
        if let Some(len) = lookup(ENV_SEQUENCE_LENGTH) {
            config.scanner.sequence_length = parse_usize(ENV_SEQUENCE_LENGTH, &len)?;
        }
        if let Some(threshold) = lookup(ENV_THRESHOLD) {
            config.scanner.mutant_threshold = parse_usize(ENV_THRESHOLD, &threshold)?;
        }

        config.scanner.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{} must be a non-negative integer, got '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DetectorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DetectorConfig::default());
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_FILE));
        assert_eq!(config.scanner.sequence_length, 4);
        assert_eq!(config.scanner.mutant_threshold, 2);
    }

    #[test]
    fn test_env_overrides() {
        let config = DetectorConfig::from_lookup(lookup(&[
            (ENV_STORE, "/tmp/verdicts.json"),
            (ENV_SEQUENCE_LENGTH, "5"),
            (ENV_THRESHOLD, " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/verdicts.json"));
        assert_eq!(config.scanner.sequence_length, 5);
        assert_eq!(config.scanner.mutant_threshold, 3);
    }

    #[test]
    fn test_bad_values_rejected() {
        let err = DetectorConfig::from_lookup(lookup(&[(ENV_THRESHOLD, "two")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = DetectorConfig::from_lookup(lookup(&[(ENV_SEQUENCE_LENGTH, "1")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_config_file_then_env() {
        let dir = std::env::temp_dir().join(format!("mutant-config-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{"store_path": "from-file.json", "scanner": {"mutant_threshold": 3}}"#).unwrap();
        let path_str = path.to_str().unwrap().to_string();

        let config = DetectorConfig::from_lookup(lookup(&[(ENV_CONFIG, path_str.as_str())])).unwrap();
        assert_eq!(config.store_path, PathBuf::from("from-file.json"));
        assert_eq!(config.scanner.sequence_length, 4);
        assert_eq!(config.scanner.mutant_threshold, 3);

        let config = DetectorConfig::from_lookup(lookup(&[
            (ENV_CONFIG, path_str.as_str()),
            (ENV_STORE, "override.json"),
        ]))
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("override.json"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_config_file() {
        let err = DetectorConfig::from_lookup(lookup(&[(ENV_CONFIG, "/nonexistent/mutant.json")])).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
