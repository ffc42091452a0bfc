//! Shared read-and-parse step for every use case

use crate::domain::{Diagnostic, Document, ParseOutcome, RegistryKind};
use crate::error::{Result, UpkeepError};
use crate::infrastructure::RegistryRepository;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Read and parse a registry, logging every diagnostic.
///
/// With `strict`, a malformed date anywhere turns into a `Parse` error so the
/// caller never writes back a reinterpreted file.
pub(crate) fn load_registry<R: RegistryRepository>(
    repository: &R,
    kind: RegistryKind,
    today: NaiveDate,
    strict: bool,
) -> Result<ParseOutcome> {
    let path = repository.registry_path(kind);
    let text = repository.read_registry(kind)?;
    debug!("Parsing {} ({} bytes)", path.display(), text.len());

    let outcome = Document::parse(&text, kind, today);
    for diagnostic in &outcome.diagnostics {
        warn!("{}: {}", kind.file_name(), diagnostic);
    }

    if strict && !outcome.is_clean() {
        let issues = outcome
            .diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::MalformedDate { .. }))
            .map(|d| d.to_string())
            .collect();
        return Err(UpkeepError::Parse { path, issues });
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FileSystemRepository;
    use std::fs;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_strict_rejects_malformed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("SUPPORT.txt"), "soon Alice\n").unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        match load_registry(&repo, RegistryKind::Support, today(), true).unwrap_err() {
            UpkeepError::Parse { issues, .. } => {
                assert_eq!(issues.len(), 1);
                assert!(issues[0].contains("line 1"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_keeps_document() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("SUPPORT.txt"), "soon Alice\n").unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let outcome = load_registry(&repo, RegistryKind::Support, today(), false).unwrap();
        assert!(!outcome.is_clean());
        assert_eq!(outcome.document.serialize(), "soon Alice\n");
    }

    #[test]
    fn test_expired_entries_do_not_fail_strict() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("SUPPORT.txt"), "2020-01-01 Alice\n").unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let outcome = load_registry(&repo, RegistryKind::Support, today(), true).unwrap();
        assert!(outcome.has_expired_entries());
    }
}
