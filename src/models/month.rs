//! Month keys and month matching
//!
//! Expenses are grouped by month through their date string. The default
//! `Prefix` mode is a literal `starts_with` test, so a short key such as
//! `"2024-1"` also matches `"2024-10"` through `"2024-19"`. `Calendar` mode
//! parses both sides with chrono and compares year and month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// Number of leading characters of a date that form its month key
pub const MONTH_KEY_LEN: usize = 7;

/// How expense dates are matched against a month key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MonthMatching {
    /// Literal string prefix comparison (default)
    #[default]
    Prefix,
    /// Calendar-aware year/month comparison
    Calendar,
}

impl MonthMatching {
    /// Check whether an expense date falls in `month`
    ///
    /// In calendar mode, dates that are not valid `YYYY-MM-DD` never match.
    pub fn matches(&self, date: &str, month: &str) -> bool {
        match self {
            Self::Prefix => date.starts_with(month),
            Self::Calendar => match (parse_month(month), parse_date(date)) {
                (Ok((year, month)), Some(date)) => date.year() == year && date.month() == month,
                _ => false,
            },
        }
    }

    /// Validate a month key for use with this mode
    ///
    /// Prefix mode accepts any string, like the dates it is compared against.
    pub fn validate_month(&self, month: &str) -> ExpenseResult<()> {
        match self {
            Self::Prefix => Ok(()),
            Self::Calendar => parse_month(month).map(|_| ()),
        }
    }
}

impl fmt::Display for MonthMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix => write!(f, "prefix"),
            Self::Calendar => write!(f, "calendar"),
        }
    }
}

/// The month key of a date string: its first seven characters
pub fn month_key(date: &str) -> &str {
    match date.char_indices().nth(MONTH_KEY_LEN) {
        Some((idx, _)) => &date[..idx],
        None => date,
    }
}

/// The month key for today, in local time
pub fn current_month() -> String {
    chrono::Local::now().date_naive().format("%Y-%m").to_string()
}

/// Today's date as a `YYYY-MM-DD` string, in local time
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM` month key into (year, month)
pub fn parse_month(month: &str) -> ExpenseResult<(i32, u32)> {
    let invalid = || ExpenseError::InvalidMonth(month.to_string());

    if month.len() != MONTH_KEY_LEN {
        return Err(invalid());
    }
    let first = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .map_err(|_| invalid())?;
    Ok((first.year(), first.month()))
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    let head = date.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
