//! Exercise log filtering

use std::fmt;
use std::str::FromStr;

use super::exercise::parse_positive;
use super::{CalendarDate, ValidationError};

/// How `from`/`to` bounds are compared against stored dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateComparison {
    /// True calendar ordering.
    #[default]
    Chronological,
    /// Compare the calendar-date strings (`Sun Jan 15 2023`) as text.
    ///
    /// Matches older deployments of the service. Ordering across weekdays,
    /// months and years is not chronological in this mode.
    Lexicographic,
}

impl DateComparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chronological => "chronological",
            Self::Lexicographic => "lexicographic",
        }
    }
}

impl fmt::Display for DateComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateComparison {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chronological" => Ok(Self::Chronological),
            "lexicographic" => Ok(Self::Lexicographic),
            other => Err(format!(
                "unknown date comparison '{}' (expected chronological or lexicographic)",
                other
            )),
        }
    }
}

/// Validated `from`/`to`/`limit` parameters for a log query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Inclusive lower bound
    pub from: Option<CalendarDate>,
    /// Inclusive upper bound
    pub to: Option<CalendarDate>,
    /// Maximum number of entries returned
    pub limit: Option<i64>,
}

impl LogFilter {
    /// Build a filter from raw query values. Empty strings count as absent.
    pub fn parse(
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            from: present(from)
                .map(|s| CalendarDate::parse("from", s))
                .transpose()?,
            to: present(to).map(|s| CalendarDate::parse("to", s)).transpose()?,
            limit: present(limit)
                .map(|s| parse_positive("limit", s))
                .transpose()?,
        })
    }

    /// Whether `date` falls inside the bounds under `comparison`.
    pub fn admits(&self, date: CalendarDate, comparison: DateComparison) -> bool {
        match comparison {
            DateComparison::Chronological => {
                self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
            }
            DateComparison::Lexicographic => {
                let text = date.to_string();
                self.from.map_or(true, |from| text >= from.to_string())
                    && self.to.map_or(true, |to| text <= to.to_string())
            }
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
