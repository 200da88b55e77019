//! Calendar month arithmetic for report and budget queries.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month, written `YYYY-MM` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn current() -> Self {
        Self::containing(today())
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn prev(self) -> Self {
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

    /// The `count` months before `self`, oldest first. `self` is not included.
    pub fn preceding(self, count: usize) -> Vec<Month> {
        let mut months = Vec::with_capacity(count);
        let mut cursor = self;
        for _ in 0..count {
            cursor = cursor.prev();
            months.push(cursor);
        }
        months.reverse();
        months
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid month '{0}', expected YYYY-MM")]
pub struct MonthParseError(String);

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthParseError(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(err)?;
        let year = year.parse::<i32>().map_err(|_| err())?;
        let month = month.parse::<u32>().map_err(|_| err())?;
        Month::new(year, month).ok_or_else(err)
    }
}

/// Today's date in the browser's local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padding() {
        assert_eq!(Month::new(2024, 3).unwrap().to_string(), "2024-03");
    }

    #[test]
    fn prev_wraps_the_year() {
        assert_eq!(Month::new(2024, 1).unwrap().prev(), Month::new(2023, 12).unwrap());
    }

    #[test]
    fn preceding_is_chronological_and_excludes_self() {
        let months = Month::new(2024, 2).unwrap().preceding(4);
        let labels: Vec<String> = months.iter().map(Month::to_string).collect();
        assert_eq!(labels, vec!["2023-10", "2023-11", "2023-12", "2024-01"]);
    }

    #[test]
    fn parses_input_month_values() {
        assert_eq!("2025-11".parse::<Month>().unwrap(), Month::new(2025, 11).unwrap());
        assert!("2025-13".parse::<Month>().is_err());
        assert!("2025".parse::<Month>().is_err());
    }

    #[test]
    fn containing_takes_year_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 31).unwrap();
        assert_eq!(Month::containing(date).to_string(), "2024-07");
    }
}
