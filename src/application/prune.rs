//! Prune expired entries use case

use crate::application::loader::load_registry;
use crate::domain::RegistryKind;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, RegistryRepository};
use chrono::NaiveDate;
use tracing::info;

/// Service that drops entries dated before today and writes the file back
pub struct PruneService {
    repository: FileSystemRepository,
}

impl PruneService {
    pub fn new(repository: FileSystemRepository) -> Self {
        PruneService { repository }
    }

    /// Returns the number of removed entries
    pub fn execute(&self, kind: RegistryKind, today: NaiveDate) -> Result<usize> {
        let mut outcome = load_registry(&self.repository, kind, today, true)?;

        let removed = outcome.document.prune(today);
        self.repository
            .write_registry(kind, &outcome.document.serialize())?;
        info!("Pruned {} entries from {}", removed, kind.file_name());

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_prune_writes_back() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("MAINTAINERS.txt"),
            "# old\n2024-03-14 Old\nCore:\n2024-03-15 Today\n2023-01-01 Older\n",
        )
        .unwrap();
        let service = PruneService::new(FileSystemRepository::new(temp.path().to_path_buf()));

        let removed = service
            .execute(
                RegistryKind::Maintainers,
                NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            )
            .unwrap();
        assert_eq!(removed, 2);
        assert_eq!(
            fs::read_to_string(temp.path().join("MAINTAINERS.txt")).unwrap(),
            "# old\nCore:\n2024-03-15 Today\n"
        );
    }
}
