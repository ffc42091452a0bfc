//! List entries use case

use crate::application::loader::load_registry;
use crate::domain::{Contact, RegistryKind, SupportStatus};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, RegistryRepository};
use chrono::NaiveDate;

/// One dated entry with its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub section: Option<String>,
    pub date: NaiveDate,
    pub contact: Contact,
    pub status: SupportStatus,
}

/// Every entry of a registry plus the status of the registry as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListing {
    pub overall: SupportStatus,
    pub entries: Vec<ListedEntry>,
}

/// Service for listing dated entries with their support status
pub struct ListEntriesService {
    repository: FileSystemRepository,
}

impl ListEntriesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    pub fn execute(&self, kind: RegistryKind, today: NaiveDate) -> Result<EntryListing> {
        let config = self.repository.load_config()?;
        let warning_days = config.warning_days;
        let outcome = load_registry(&self.repository, kind, today, true)?;
        let document = &outcome.document;

        let entries = document
            .entries()
            .into_iter()
            .map(|entry| ListedEntry {
                section: entry.section.map(str::to_string),
                date: entry.date,
                status: SupportStatus::classify(entry.date, today, warning_days),
                contact: entry.contact,
            })
            .collect();

        Ok(EntryListing {
            overall: document.overall_status(today, warning_days),
            entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_list_classifies_entries() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("SUPPORT.txt"),
            "2030-01-01 Alice <a@x.com>\nCore:\n2020-01-01 Bob\n2024-04-01 Carol\n",
        )
        .unwrap();
        let service = ListEntriesService::new(FileSystemRepository::new(temp.path().to_path_buf()));

        let listing = service
            .execute(RegistryKind::Support, ymd(2024, 3, 15))
            .unwrap();
        assert_eq!(listing.overall, SupportStatus::Current);

        let statuses: Vec<_> = listing
            .entries
            .iter()
            .map(|e| (e.contact.name.as_str(), e.status))
            .collect();
        assert_eq!(
            statuses,
            vec![
                ("Alice", SupportStatus::Current),
                ("Bob", SupportStatus::Expired),
                ("Carol", SupportStatus::ExpiringSoon),
            ]
        );
        assert_eq!(listing.entries[1].section.as_deref(), Some("Core"));
    }

    #[test]
    fn test_list_honours_warning_days() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("SUPPORT.txt"), "2024-04-01 Carol\n").unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let config = Config {
            warning_days: 7,
            ..Config::default()
        };
        repo.save_config(&config).unwrap();

        let listing = ListEntriesService::new(repo)
            .execute(RegistryKind::Support, ymd(2024, 3, 15))
            .unwrap();
        assert_eq!(listing.entries[0].status, SupportStatus::Current);
        assert_eq!(listing.overall, SupportStatus::Current);
    }
}
