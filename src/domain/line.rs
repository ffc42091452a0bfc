//! A single physical line of a registry file

use chrono::NaiveDate;
use std::fmt;

/// Date format used for dated entries, both when reading and writing
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A registry line, classified once when it is read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Comment, blank or unparseable content, kept verbatim
    Literal(String),
    /// A date followed by free text (usually ` Name <email>`)
    Dated { date: NaiveDate, remainder: String },
}

/// A non-comment line whose first token is not a `YYYY-MM-DD` date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub token: String,
    pub text: String,
}

impl MalformedLine {
    /// Keep the original text so the file still round-trips
    pub fn into_literal(self) -> Line {
        Line::Literal(self.text)
    }
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse date '{}' in: {}", self.token, self.text)
    }
}

impl Line {
    /// Classify a physical line (without its trailing newline)
    pub fn parse(raw: &str) -> Result<Line, MalformedLine> {
        if raw.is_empty() || raw.starts_with('#') {
            return Ok(Line::Literal(raw.to_string()));
        }

        let split = raw.find(char::is_whitespace).unwrap_or(raw.len());
        let (token, remainder) = raw.split_at(split);

        match NaiveDate::parse_from_str(token, DATE_FORMAT) {
            Ok(date) => Ok(Line::Dated {
                date,
                remainder: remainder.to_string(),
            }),
            Err(_) => Err(MalformedLine {
                token: token.to_string(),
                text: raw.to_string(),
            }),
        }
    }

    /// Build a fresh entry for a contact
    pub fn entry(date: NaiveDate, name: &str) -> Line {
        Line::Dated {
            date,
            remainder: format!(" {}", name),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Line::Literal(_))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Line::Dated { date, .. } => Some(*date),
            Line::Literal(_) => None,
        }
    }

    /// Literal lines always survive; dated ones only while `date >= today`
    pub fn is_current(&self, today: NaiveDate) -> bool {
        match self {
            Line::Literal(_) => true,
            Line::Dated { date, .. } => today <= *date,
        }
    }

    /// Move the date of a dated entry whose contact matches `name` exactly (after trimming)
    pub fn bump(&mut self, to_date: NaiveDate, name: &str) -> bool {
        match self {
            Line::Dated { date, remainder } if remainder.trim() == name.trim() => {
                *date = to_date;
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Literal(text) => writeln!(f, "{}", text),
            Line::Dated { date, remainder } => {
                writeln!(f, "{}{}", date.format(DATE_FORMAT), remainder)
            }
        }
    }
}
