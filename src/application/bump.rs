//! Bump contact use case

use crate::application::loader::load_registry;
use crate::domain::{BumpOffset, BumpResult, RegistryKind};
use crate::error::{Result, UpkeepError};
use crate::infrastructure::{FileSystemRepository, RegistryRepository};
use chrono::NaiveDate;
use tracing::info;

/// What a bump did to the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub name: String,
    pub date: NaiveDate,
    pub result: BumpResult,
}

/// Service that renews a contact, or registers it if it is new
pub struct BumpService {
    repository: FileSystemRepository,
}

impl BumpService {
    pub fn new(repository: FileSystemRepository) -> Self {
        BumpService { repository }
    }

    /// Move `name` (or the configured identity) to `offset` from today and write the file back
    pub fn execute(
        &self,
        kind: RegistryKind,
        today: NaiveDate,
        offset: BumpOffset,
        name: Option<&str>,
    ) -> Result<BumpOutcome> {
        let mut outcome = load_registry(&self.repository, kind, today, true)?;

        let name = match name {
            Some(name) => name.to_string(),
            None => self
                .repository
                .load_config()?
                .get_identity()
                .ok_or(UpkeepError::MissingIdentity)?,
        };
        let date = offset.resolve(today)?;

        let result = outcome.document.bump_or_add(date, &name);
        self.repository
            .write_registry(kind, &outcome.document.serialize())?;
        info!(
            "{:?} {} until {} in {}",
            result,
            name,
            date,
            kind.file_name()
        );

        Ok(BumpOutcome { name, date, result })
    }
}
