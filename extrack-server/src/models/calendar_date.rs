//! Calendar dates and their fixed string form
//!
//! Every date leaving the server is rendered as `Weekday Month DD YYYY`
//! (e.g. `Sun Jan 15 2023`). Dates are stored as ISO `YYYY-MM-DD`.

use std::fmt;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use super::ValidationError;

/// `strftime` pattern for the calendar-date string.
const CALENDAR_FORMAT: &str = "%a %b %d %Y";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", CALENDAR_FORMAT];

/// Years with exactly four digits. Outside this range chrono writes a sign
/// and the stored ISO text no longer sorts by date.
const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// A calendar date with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse user input for `field`.
    ///
    /// Accepts `YYYY-MM-DD`, ISO datetimes (with or without an offset) and
    /// the calendar-date string itself. Any time component is dropped.
    /// Years outside `0000..=9999` are rejected.
    ///
    /// # Example
    /// ```
    /// use extrack_server::models::CalendarDate;
    ///
    /// let date = CalendarDate::parse("date", "2023-01-15").unwrap();
    /// assert_eq!(date.to_string(), "Sun Jan 15 2023");
    /// assert!(CalendarDate::parse("date", "not-a-date").is_err());
    /// ```
    pub fn parse(field: &'static str, input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate {
            field,
            value: input.to_owned(),
        };

        let date = Self::parse_any(input.trim()).ok_or_else(invalid)?;
        if !YEARS.contains(&date.year()) {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    fn parse_any(s: &str) -> Option<NaiveDate> {

        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                return Some(date);
            }
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }

        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| dt.date())
    }

    /// The current date in the server's local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CALENDAR_FORMAT))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
