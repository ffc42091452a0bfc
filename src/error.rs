//! Error types for upkeep

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the upkeep application
#[derive(Debug, Error)]
pub enum UpkeepError {
    #[error("Registry file not found: {0}")]
    MissingRegistry(PathBuf),

    #[error("Failed to parse {}: {} malformed line(s)", .path.display(), .issues.len())]
    Parse { path: PathBuf, issues: Vec<String> },

    #[error("Invalid bump offset: {0}")]
    InvalidOffset(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No contact name given and no identity configured")]
    MissingIdentity,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl UpkeepError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            UpkeepError::MissingRegistry(_) => 2,
            UpkeepError::Parse { .. } => 3,
            UpkeepError::InvalidOffset(_) | UpkeepError::InvalidDate(_) => 4,
            UpkeepError::MissingIdentity => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            UpkeepError::MissingRegistry(path) => {
                format!(
                    "Registry file not found: {}\n\n\
                    Suggestions:\n\
                    • Run upkeep from the directory holding the registry\n\
                    • Pass --dir <PATH> or set UPKEEP_DIR\n\
                    • Use --kind maintainers for MAINTAINERS.txt",
                    path.display()
                )
            }
            UpkeepError::Parse { path, issues } => {
                let mut msg = format!(
                    "{} parse error, file left untouched:\n",
                    path.display()
                );
                for issue in issues {
                    msg.push_str(&format!("• {}\n", issue));
                }
                msg.push_str(
                    "\nEvery non-comment line must start with a YYYY-MM-DD date.\n\
                    Fix or comment out (#) the lines above and try again.",
                );
                msg
            }
            UpkeepError::InvalidOffset(detail) => {
                format!(
                    "Invalid bump offset: {}\n\n\
                    Usage: upkeep bump <amount> <days|months|years> [name]\n\n\
                    Examples:\n\
                    upkeep bump 6 months\n\
                    upkeep bump 1 year \"Alice <alice@example.com>\"\n\
                    upkeep bump 15 days   (sets the day of the current month)",
                    detail
                )
            }
            UpkeepError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: upkeep --today 2025-01-17 prune",
                    value
                )
            }
            UpkeepError::MissingIdentity => "No contact name given and no identity configured\n\n\
                Suggestions:\n\
                • Pass the contact explicitly: upkeep bump 6 months \"Name <email>\"\n\
                • Set UPKEEP_IDENTITY environment variable\n\
                • Configure it: upkeep config identity \"Name <email>\""
                .to_string(),
            UpkeepError::Config(msg) => {
                if msg.contains("Invalid registry kind") {
                    format!(
                        "{}\n\n\
                        Example: upkeep config kind maintainers",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using UpkeepError
pub type Result<T> = std::result::Result<T, UpkeepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_registry_suggestion() {
        let err = UpkeepError::MissingRegistry(PathBuf::from("/tmp/SUPPORT.txt"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/SUPPORT.txt"));
        assert!(msg.contains("UPKEEP_DIR"));
        assert!(msg.contains("Suggestions"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_error_lists_issues() {
        let err = UpkeepError::Parse {
            path: PathBuf::from("SUPPORT.txt"),
            issues: vec!["line 2: failed to parse date 'soon': soon Alice".to_string()],
        };
        assert_eq!(err.to_string(), "Failed to parse SUPPORT.txt: 1 malformed line(s)");
        let msg = err.display_with_suggestions();
        assert!(msg.contains("file left untouched"));
        assert!(msg.contains("line 2"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_invalid_offset_examples() {
        let err = UpkeepError::InvalidOffset("unknown unit 'weeks'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("upkeep bump 6 months"));
        assert!(msg.contains("weeks"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_missing_identity_suggestions() {
        let err = UpkeepError::MissingIdentity;
        let msg = err.display_with_suggestions();
        assert!(msg.contains("UPKEEP_IDENTITY"));
        assert!(msg.contains("upkeep config identity"));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_config_invalid_kind_suggestions() {
        let err = UpkeepError::Config("Invalid registry kind: 'x'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("upkeep config kind maintainers"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = UpkeepError::Config("bad value".to_string());
        assert_eq!(err.display_with_suggestions(), "bad value");
    }
}
