//! Bump offsets: how far to push a contact's date

use crate::error::{Result, UpkeepError};
use chrono::{Datelike, Months, NaiveDate};

/// Offset applied to today to get the new date for a bumped entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpOffset {
    /// Set the day of the current month (clamped to its last day; 0 keeps the day)
    DayOfMonth(u32),
    /// Calendar months from today
    Months(i32),
    /// Calendar years from today
    Years(i32),
}

impl BumpOffset {
    /// Parse an amount and a unit such as `6 months`, `1 y` or `15 days`
    pub fn parse(amount: &str, unit: &str) -> Result<Self> {
        let value: i32 = amount
            .trim()
            .parse()
            .map_err(|_| UpkeepError::InvalidOffset(format!("'{}' is not a number", amount)))?;

        match unit.trim().to_lowercase().chars().next() {
            Some('d') => u32::try_from(value).map(BumpOffset::DayOfMonth).map_err(|_| {
                UpkeepError::InvalidOffset(format!("day of month cannot be negative: {}", value))
            }),
            Some('m') => Ok(BumpOffset::Months(value)),
            Some('y') => Ok(BumpOffset::Years(value)),
            _ => Err(UpkeepError::InvalidOffset(format!(
                "unknown unit '{}' (expected days, months or years)",
                unit
            ))),
        }
    }

    /// Resolve this offset against a base date
    pub fn resolve(&self, base_date: NaiveDate) -> Result<NaiveDate> {
        let resolved = match self {
            BumpOffset::DayOfMonth(0) => Some(base_date),
            BumpOffset::DayOfMonth(day) => {
                base_date.with_day((*day).min(last_day_of_month(base_date)))
            }
            BumpOffset::Months(months) => add_months(base_date, *months),
            BumpOffset::Years(years) => years
                .checked_mul(12)
                .and_then(|months| add_months(base_date, months)),
        };

        resolved.ok_or_else(|| {
            UpkeepError::InvalidOffset(format!("{:?} from {} is out of range", self, base_date))
        })
    }
}

fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let magnitude = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

fn last_day_of_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
