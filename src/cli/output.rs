//! Output formatting utilities

use crate::application::{CheckReport, EntryListing};
use crate::domain::DATE_FORMAT;

/// Format the result of `check`
pub fn format_check_report(report: &CheckReport) -> String {
    if report.sections.is_empty() {
        return "parsed OK\n".to_string();
    }

    let mut output = String::new();
    for section in &report.sections {
        match &section.name {
            None => output.push_str(&format!(
                "support promised for {} days\n",
                section.days_remaining
            )),
            Some(name) => output.push_str(&format!(
                "\n{}:\n\tpromised for {} days\n",
                name, section.days_remaining
            )),
        }
    }

    if report.has_expired_entries {
        output.push_str(&format!(
            "\n{} has outdated entries\n",
            report.kind.file_name()
        ));
    }
    output
}

/// Format the result of `list`, grouping entries under their section
pub fn format_entry_listing(listing: &EntryListing) -> String {
    let mut output = format!("status: {}\n", listing.overall.label());
    if listing.entries.is_empty() {
        output.push_str("No entries found\n");
        return output;
    }

    let mut current: Option<&str> = None;
    for entry in &listing.entries {
        let section = entry.section.as_deref();
        if section != current {
            if let Some(name) = section {
                output.push_str(&format!("{}:\n", name));
            }
            current = section;
        }
        let indent = if section.is_some() { "  " } else { "" };
        output.push_str(&format!(
            "{}[{}] {}  {}\n",
            indent,
            entry.status.label(),
            entry.date.format(DATE_FORMAT),
            entry.contact
        ));
    }
    output
}
