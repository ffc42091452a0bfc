//! Configuration management

use crate::domain::RegistryKind;
use crate::error::{UpkeepError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file kept next to the registry files
pub const CONFIG_FILE: &str = ".upkeep.toml";

/// Days before the end of a commitment at which it counts as "expiring soon"
pub const DEFAULT_WARNING_DAYS: i64 = 180;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Registry used when `--kind` is not given
    pub kind: RegistryKind,
    /// Contact used by `bump` when no name is passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    pub warning_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            kind: RegistryKind::default(),
            identity: None,
            warning_days: DEFAULT_WARNING_DAYS,
        }
    }
}

impl Config {
    /// Load config from .upkeep.toml in the given directory, or defaults if there is none
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(UpkeepError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| UpkeepError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    /// Save config to .upkeep.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    /// Get the default contact, checking the environment first
    pub fn get_identity(&self) -> Option<String> {
        std::env::var("UPKEEP_IDENTITY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.identity.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.kind, RegistryKind::Support);
        assert_eq!(config.identity, None);
        assert_eq!(config.warning_days, 180);
    }

    #[test]
    fn test_missing_config_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            kind: RegistryKind::Maintainers,
            identity: Some("Alice <a@x.com>".to_string()),
            warning_days: 90,
        };

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(CONFIG_FILE).exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "kind = \"maintainers\"\n").unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.kind, RegistryKind::Maintainers);
        assert_eq!(loaded.warning_days, DEFAULT_WARNING_DAYS);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "kind = \"owners\"\n").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            UpkeepError::Config(msg) => assert!(msg.contains(CONFIG_FILE)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unset_identity_not_serialized() {
        let contents = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(contents.contains("kind = \"support\""));
        assert!(!contents.contains("identity"));
    }
}
