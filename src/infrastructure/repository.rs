//! File system repository for registry files

use crate::domain::RegistryKind;
use crate::error::{Result, UpkeepError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for registry storage
pub trait RegistryRepository {
    /// Directory holding the registry files
    fn root(&self) -> &Path;

    /// Load configuration from .upkeep.toml (defaults if absent)
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .upkeep.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Full path of the registry file of this kind
    fn registry_path(&self, kind: RegistryKind) -> PathBuf {
        self.root().join(kind.file_name())
    }

    /// Read the whole registry file
    fn read_registry(&self, kind: RegistryKind) -> Result<String>;

    /// Replace the registry file content
    fn write_registry(&self, kind: RegistryKind, content: &str) -> Result<()>;
}

/// File system implementation of RegistryRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Pick the registry directory: explicit path, then UPKEEP_DIR, then the current directory
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(FileSystemRepository::new(path));
        }

        if let Ok(root_path) = std::env::var("UPKEEP_DIR") {
            let path = PathBuf::from(root_path);
            if path.is_dir() {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(UpkeepError::Config(format!(
                "UPKEEP_DIR is set to '{}' but it is not a directory. \
                Point it at the directory holding your registry or unset it.",
                path.display()
            )));
        }

        Ok(FileSystemRepository::new(std::env::current_dir()?))
    }
}

impl RegistryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn read_registry(&self, kind: RegistryKind) -> Result<String> {
        let path = self.registry_path(kind);
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                UpkeepError::MissingRegistry(path.clone())
            } else {
                UpkeepError::Io(e)
            }
        })
    }

    fn write_registry(&self, kind: RegistryKind, content: &str) -> Result<()> {
        fs::write(self.registry_path(kind), content).map_err(UpkeepError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_registry_path_uses_kind_file_name() {
        let repo = FileSystemRepository::new(PathBuf::from("/srv/project"));
        assert_eq!(
            repo.registry_path(RegistryKind::Maintainers),
            PathBuf::from("/srv/project/MAINTAINERS.txt")
        );
    }

    #[test]
    fn test_read_missing_registry() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        match repo.read_registry(RegistryKind::Support).unwrap_err() {
            UpkeepError::MissingRegistry(path) => {
                assert_eq!(path, temp.path().join("SUPPORT.txt"))
            }
            other => panic!("Expected MissingRegistry error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_then_read_registry() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.write_registry(RegistryKind::Support, "2025-01-01 Alice\n")
            .unwrap();
        assert_eq!(
            repo.read_registry(RegistryKind::Support).unwrap(),
            "2025-01-01 Alice\n"
        );
        assert!(!repo.registry_path(RegistryKind::Maintainers).exists());
    }

    #[test]
    fn test_discover_explicit_path() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::discover(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(repo.root(), temp.path());
    }

    #[test]
    fn test_config_round_trip_through_repository() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let mut config = repo.load_config().unwrap();
        config.warning_days = 30;
        repo.save_config(&config).unwrap();

        assert_eq!(repo.load_config().unwrap().warning_days, 30);
    }
}
