//! Named groups of registry lines

use crate::domain::line::{Line, MalformedLine};
use chrono::NaiveDate;
use std::fmt;

/// An ordered run of lines, optionally introduced by a `Name:` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: Option<String>,
    lines: Vec<Line>,
    /// Only tracked for support registries; seeded with the parse date
    latest_date: Option<NaiveDate>,
}

impl Section {
    /// Create a section that does not track dates
    pub fn new(name: Option<String>) -> Self {
        Section {
            name,
            lines: Vec::new(),
            latest_date: None,
        }
    }

    /// Create a section whose latest date starts at `seed` and grows as entries are added
    pub fn tracking(name: Option<String>, seed: NaiveDate) -> Self {
        Section {
            name,
            lines: Vec::new(),
            latest_date: Some(seed),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Latest date among dated entries, never earlier than the seed
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.latest_date
    }

    /// Parse and append a line. A malformed line is still appended, as a literal.
    pub fn add_line(&mut self, raw: &str) -> Result<(), MalformedLine> {
        match Line::parse(raw) {
            Ok(line) => {
                if let (Some(latest), Some(date)) = (self.latest_date, line.date()) {
                    if date > latest {
                        self.latest_date = Some(date);
                    }
                }
                self.lines.push(line);
                Ok(())
            }
            Err(malformed) => {
                self.lines.push(malformed.clone().into_literal());
                Err(malformed)
            }
        }
    }

    /// Drop dated entries before `today`, returning how many were removed
    pub fn prune(&mut self, today: NaiveDate) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| line.is_current(today));
        before - self.lines.len()
    }

    /// Move every entry for `name` to `to_date`; true if any matched
    pub fn bump(&mut self, to_date: NaiveDate, name: &str) -> bool {
        let mut found = false;
        for line in &mut self.lines {
            if line.bump(to_date, name) {
                found = true;
            }
        }
        found
    }

    /// Insert a new entry right after the last dated line, or at the end if there is none
    pub fn add(&mut self, date: NaiveDate, name: &str) {
        let line = Line::entry(date, name);
        match self.lines.iter().rposition(|line| !line.is_literal()) {
            Some(index) => self.lines.insert(index + 1, line),
            None => self.lines.push(line),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            writeln!(f, "{}:", name)?;
        }
        for line in &self.lines {
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
