//! Check registry use case

use crate::application::loader::load_registry;
use crate::domain::RegistryKind;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// How long one section is covered for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub name: Option<String>,
    pub latest_date: NaiveDate,
    /// Never negative: the latest date is seeded with today
    pub days_remaining: i64,
}

/// Result of checking a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub kind: RegistryKind,
    /// Empty for registries that do not track dates
    pub sections: Vec<SectionReport>,
    pub has_expired_entries: bool,
}

/// Service that validates a registry and reports coverage per section
pub struct CheckService {
    repository: FileSystemRepository,
}

impl CheckService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CheckService { repository }
    }

    pub fn execute(&self, kind: RegistryKind, today: NaiveDate) -> Result<CheckReport> {
        let outcome = load_registry(&self.repository, kind, today, true)?;

        let sections = outcome
            .document
            .sections()
            .iter()
            .filter_map(|section| {
                section.latest_date().map(|latest| SectionReport {
                    name: section.name().map(str::to_string),
                    latest_date: latest,
                    days_remaining: (latest - today).num_days(),
                })
            })
            .collect();

        Ok(CheckReport {
            kind,
            sections,
            has_expired_entries: outcome.has_expired_entries(),
        })
    }
}
