//! Contact identities and support status classification

use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Matches the `<email>` part of a contact identity
fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<(.*)>").unwrap())
}

/// A contact as written after the date, e.g. `Alice Smith <alice@example.com>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: Option<String>,
}

impl Contact {
    /// Split the free text of a dated entry into name and email
    pub fn from_remainder(text: &str) -> Self {
        let text = text.trim();
        match email_regex().captures(text) {
            Some(caps) => {
                let email = caps[1].trim().to_string();
                let name = email_regex().replace(text, "").trim().to_string();
                Contact {
                    name,
                    email: Some(email),
                }
            }
            None => Contact {
                name: text.to_string(),
                email: None,
            },
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.email, self.name.is_empty()) {
            (Some(email), true) => write!(f, "<{}>", email),
            (Some(email), false) => write!(f, "{} <{}>", self.name, email),
            (None, _) => write!(f, "{}", self.name),
        }
    }
}

/// How close a commitment is to running out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportStatus {
    /// Date already passed
    Expired,
    /// Ends within the warning window
    ExpiringSoon,
    /// Ends after the warning window
    Current,
}

impl SupportStatus {
    pub fn classify(date: NaiveDate, today: NaiveDate, warning_days: i64) -> Self {
        if date < today {
            SupportStatus::Expired
        } else if date < warning_horizon(today, warning_days) {
            SupportStatus::ExpiringSoon
        } else {
            SupportStatus::Current
        }
    }

    /// Short label used in listings
    pub fn label(&self) -> &'static str {
        match self {
            SupportStatus::Expired => "expired",
            SupportStatus::ExpiringSoon => "soon",
            SupportStatus::Current => "ok",
        }
    }
}

/// First date that is no longer "soon"
pub(crate) fn warning_horizon(today: NaiveDate, warning_days: i64) -> NaiveDate {
    Duration::try_days(warning_days)
        .and_then(|delta| today.checked_add_signed(delta))
        .unwrap_or(NaiveDate::MAX)
}
