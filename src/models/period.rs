//! Calendar month keys
//!
//! Reports group transactions by the calendar month and year of their date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month (e.g. "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthKey {
    /// Create a month key; `month` must be 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if (1..=12).contains(&month) {
            Ok(Self { year, month })
        } else {
            Err(PeriodParseError::InvalidMonth(month))
        }
    }

    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// English month name ("January")
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Heading form, e.g. "January 2025"
    pub fn friendly(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// Parse "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// English name of a 1-based month number; empty for out-of-range input
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month format: {} (expected YYYY-MM)", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_and_contains() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        let key = MonthKey::of(date);
        assert_eq!(key, MonthKey { year: 2025, month: 2 });
        assert!(key.contains(date));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()));
    }

    #[test]
    fn test_navigation_wraps_years() {
        let dec = MonthKey::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthKey::new(2025, 1).unwrap());
        assert_eq!(dec.next().prev(), dec);
    }

    #[test]
    fn test_parse_and_display() {
        let key = MonthKey::parse("2025-03").unwrap();
        assert_eq!(key.to_string(), "2025-03");
        assert_eq!(key.friendly(), "March 2025");
        assert!(MonthKey::parse("2025-13").is_err());
        assert!(MonthKey::parse("March").is_err());
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
