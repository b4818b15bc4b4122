//! Calendar types used to place records in time.
//!
//! Records store their date as separate integer components. A [Period] names
//! one calendar month and is what budgets and monthly summaries are keyed on.

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

use crate::{Error, timezone::local_today};

/// The number of months in a year, i.e. the length of a yearly series.
pub const MONTHS_PER_YEAR: usize = 12;

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    // Field order matters for the derived ordering: year first, then month.
    /// The year, e.g. 2026.
    pub year: i32,
    /// The month of the year, 1 to 12.
    pub month: u8,
}

impl Period {
    /// Create a period, checking that `month` is in 1..=12.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] if `month` is out of range.
    pub fn new(month: u8, year: i32) -> Result<Self, Error> {
        validate_month(month)?;

        Ok(Self { year, month })
    }

    /// The period containing today's date in `canonical_timezone`.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not a
    /// known timezone name.
    pub fn current(canonical_timezone: &str) -> Result<Self, Error> {
        let today = local_today(canonical_timezone)?;

        Ok(Self {
            year: today.year(),
            month: u8::from(today.month()),
        })
    }

    /// Resolve optional query parameters against the current period.
    ///
    /// Missing values are taken from the current period in
    /// `canonical_timezone`.
    pub fn from_parts_or_current(
        month: Option<u8>,
        year: Option<i32>,
        canonical_timezone: &str,
    ) -> Result<Self, Error> {
        match (month, year) {
            (Some(month), Some(year)) => Self::new(month, year),
            (month, year) => {
                let current = Self::current(canonical_timezone)?;
                Self::new(month.unwrap_or(current.month), year.unwrap_or(current.year))
            }
        }
    }

    /// The zero-based position of the month within the year.
    pub fn month_index(&self) -> usize {
        usize::from(self.month.saturating_sub(1))
    }
}

/// Optional `month` and `year` query parameters used to narrow a listing.
///
/// A missing component matches any value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PeriodFilter {
    /// Only match records in this month of the year.
    pub month: Option<u8>,
    /// Only match records in this year.
    pub year: Option<i32>,
}

impl PeriodFilter {
    /// Check the month is in range.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] if `month` is given and out of range.
    pub fn validate(self) -> Result<Self, Error> {
        if let Some(month) = self.month {
            validate_month(month)?;
        }

        Ok(self)
    }
}

/// The date of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordDate {
    /// The year, e.g. 2026.
    pub year: i32,
    /// The month of the year, 1 to 12.
    pub month: u8,
    /// The day of the month, 1 to 31.
    ///
    /// The day is not checked against the length of the month.
    pub day: u8,
}

impl RecordDate {
    /// Create a date from its components.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] or [Error::InvalidDay] if a component is
    /// out of range.
    pub fn new(day: u8, month: u8, year: i32) -> Result<Self, Error> {
        validate_month(month)?;

        if !(1..=31).contains(&day) {
            return Err(Error::InvalidDay(day));
        }

        Ok(Self { year, month, day })
    }

    /// Derive the date components from a combined date value.
    ///
    /// Accepts a calendar date (`2026-02-14`) or an RFC 3339 date-time
    /// (`2026-02-14T09:30:00Z`); for a date-time the date in its own offset is
    /// used.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] if `text` is neither format.
    pub fn parse_combined(text: &str) -> Result<Self, Error> {
        let text = text.trim();

        let date = Date::parse(text, format_description!("[year]-[month]-[day]"))
            .or_else(|_| OffsetDateTime::parse(text, &Rfc3339).map(|date_time| date_time.date()))
            .map_err(|_| Error::InvalidDate(text.to_owned()))?;

        Ok(Self::from(date))
    }

    /// The period this date falls in.
    pub fn period(&self) -> Period {
        Period {
            year: self.year,
            month: self.month,
        }
    }
}

impl From<Date> for RecordDate {
    fn from(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
            day: date.day(),
        }
    }
}

fn validate_month(month: u8) -> Result<(), Error> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::InvalidMonth(month))
    }
}
