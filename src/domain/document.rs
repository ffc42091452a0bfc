//! Whole-registry document: parse, mutate and serialize

use crate::domain::contact::{warning_horizon, Contact, SupportStatus};
use crate::domain::line::Line;
use crate::domain::registry::RegistryKind;
use crate::domain::section::Section;
use chrono::NaiveDate;
use std::fmt;

/// Something noticed while reading a registry. Parsing never stops on these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// First token of a non-comment line is not a date; the line is kept verbatim
    MalformedDate {
        line: usize,
        token: String,
        text: String,
    },
    /// A support entry whose date already passed
    Expired {
        line: usize,
        date: NaiveDate,
        entry: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedDate { line, token, text } => {
                write!(f, "line {}: failed to parse date '{}': {}", line, token, text)
            }
            Diagnostic::Expired { line, date, entry } => {
                write!(f, "line {}: entry expired on {}: {}", line, date, entry.trim())
            }
        }
    }
}

/// Result of parsing: a best-effort document plus everything worth reporting
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    /// False when any line failed date parsing; such a document must not be written back
    pub fn is_clean(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::MalformedDate { .. }))
    }

    pub fn has_expired_entries(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::Expired { .. }))
    }
}

/// What `bump_or_add` ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpResult {
    /// At least one existing entry was moved to the new date
    Renewed,
    /// No entry matched; a new one was added to the leading section
    Added,
}

/// A dated entry together with where it lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'a> {
    pub section: Option<&'a str>,
    pub date: NaiveDate,
    pub contact: Contact,
}

/// Ordered sections; the first one is always the unnamed leading section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// An empty document with only the leading section
    pub fn empty(kind: RegistryKind, today: NaiveDate) -> Self {
        Document {
            sections: vec![new_section(None, kind, today)],
        }
    }

    /// Parse registry text. `today` seeds latest-date tracking and decides expiry.
    pub fn parse(text: &str, kind: RegistryKind, today: NaiveDate) -> ParseOutcome {
        let mut document = Document::empty(kind, today);
        let mut diagnostics = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim();

            if let Some(name) = section_header(line) {
                document
                    .sections
                    .push(new_section(Some(name.to_string()), kind, today));
                continue;
            }

            let current = document.current_section_mut();
            match current.add_line(line) {
                Ok(()) => {
                    if !kind.tracks_expiry() {
                        continue;
                    }
                    if let Some(Line::Dated { date, remainder }) = current.lines().last() {
                        if *date < today {
                            diagnostics.push(Diagnostic::Expired {
                                line: line_number,
                                date: *date,
                                entry: remainder.clone(),
                            });
                        }
                    }
                }
                Err(malformed) => diagnostics.push(Diagnostic::MalformedDate {
                    line: line_number,
                    token: malformed.token,
                    text: malformed.text,
                }),
            }
        }

        ParseOutcome {
            document,
            diagnostics,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The unnamed leading section
    pub fn first_section(&self) -> &Section {
        &self.sections[0]
    }

    /// Move every entry matching `name` to `to_date`; true if anything matched
    pub fn bump(&mut self, to_date: NaiveDate, name: &str) -> bool {
        let mut found = false;
        for section in &mut self.sections {
            if section.bump(to_date, name) {
                found = true;
            }
        }
        found
    }

    /// Add a brand-new contact to the leading section
    pub fn add(&mut self, date: NaiveDate, name: &str) {
        self.sections[0].add(date, name);
    }

    /// Renew an existing contact, falling back to registering it in the leading section
    pub fn bump_or_add(&mut self, to_date: NaiveDate, name: &str) -> BumpResult {
        if self.bump(to_date, name) {
            BumpResult::Renewed
        } else {
            self.add(to_date, name);
            BumpResult::Added
        }
    }

    /// Remove expired entries from every section, returning how many went away
    pub fn prune(&mut self, today: NaiveDate) -> usize {
        self.sections
            .iter_mut()
            .map(|section| section.prune(today))
            .sum()
    }

    /// Full replacement file content
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Every dated entry in document order
    pub fn entries(&self) -> Vec<Entry<'_>> {
        self.sections
            .iter()
            .flat_map(|section| {
                section.lines().iter().filter_map(move |line| match line {
                    Line::Dated { date, remainder } => Some(Entry {
                        section: section.name(),
                        date: *date,
                        contact: Contact::from_remainder(remainder),
                    }),
                    Line::Literal(_) => None,
                })
            })
            .collect()
    }

    /// Status of the registry as a whole.
    ///
    /// The earliest entry of the leading section decides; if that one already
    /// expired while some named section is still covered, the registry is
    /// only "expiring soon".
    pub fn overall_status(&self, today: NaiveDate, warning_days: i64) -> SupportStatus {
        let mut earliest = warning_horizon(today, warning_days);
        for date in self.first_section().lines().iter().filter_map(Line::date) {
            if date < earliest {
                earliest = date;
            }
        }

        let mut status = SupportStatus::classify(earliest, today, warning_days);
        if earliest < today {
            let covered = self.sections[1..]
                .iter()
                .flat_map(|section| section.lines().iter().filter_map(Line::date))
                .any(|date| date >= today);
            if covered {
                status = SupportStatus::ExpiringSoon;
            }
        }
        status
    }

    fn current_section_mut(&mut self) -> &mut Section {
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

fn new_section(name: Option<String>, kind: RegistryKind, today: NaiveDate) -> Section {
    if kind.tracks_expiry() {
        Section::tracking(name, today)
    } else {
        Section::new(name)
    }
}

/// `Name:` opens a section; comments ending in a colon do not
fn section_header(line: &str) -> Option<&str> {
    if line.starts_with('#') {
        return None;
    }
    line.strip_suffix(':')
}
