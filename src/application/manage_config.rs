//! Config management use case

use crate::domain::RegistryKind;
use crate::error::{Result, UpkeepError};
use crate::infrastructure::{Config, FileSystemRepository, RegistryRepository};
use std::str::FromStr;

const MAX_WARNING_DAYS: i64 = 36_500;

/// Service for managing registry configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "kind" => Ok(config.kind.to_string()),
            "identity" => Ok(config.identity.unwrap_or_default()),
            "warning_days" => Ok(config.warning_days.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "kind" => {
                config.kind = RegistryKind::from_str(value).map_err(UpkeepError::Config)?;
            }
            "identity" => {
                let value = value.trim();
                config.identity = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "warning_days" => {
                config.warning_days = parse_warning_days(value)?;
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

/// Whole days, at most about a century ahead
fn parse_warning_days(value: &str) -> Result<i64> {
    match value.trim().parse::<i64>() {
        Ok(days) if (0..=MAX_WARNING_DAYS).contains(&days) => Ok(days),
        _ => Err(UpkeepError::Config(format!(
            "Invalid warning_days: '{}' (expected a whole number of days from 0 to {})",
            value, MAX_WARNING_DAYS
        ))),
    }
}

fn unknown_key(key: &str) -> UpkeepError {
    UpkeepError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: kind, identity, warning_days",
        key
    ))
}
