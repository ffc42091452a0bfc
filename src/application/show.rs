//! Show registry use case (read-only)

use crate::application::loader::load_registry;
use crate::domain::RegistryKind;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Parse a registry and render it again without changing anything.
/// Malformed lines are only logged; they come back out verbatim.
pub fn show_registry(
    repository: &FileSystemRepository,
    kind: RegistryKind,
    today: NaiveDate,
) -> Result<String> {
    let outcome = load_registry(repository, kind, today, false)?;
    Ok(outcome.document.serialize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_show_normalizes_but_keeps_content() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("MAINTAINERS.txt"),
            "# team\r\nCore:\r\n2024-1-5 Alice\r\nsomeday Bob",
        )
        .unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let shown = show_registry(
            &repo,
            RegistryKind::Maintainers,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        )
        .unwrap();
        assert_eq!(shown, "# team\nCore:\n2024-01-05 Alice\nsomeday Bob\n");

        // Read-only: the file itself is untouched
        let on_disk = fs::read_to_string(temp.path().join("MAINTAINERS.txt")).unwrap();
        assert!(on_disk.contains("2024-1-5"));
    }
}
