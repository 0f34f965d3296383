//! Calendar-day partitioning of entries
//!
//! Every entry lives in exactly one day partition, chosen from the calendar
//! date of its timestamp. This module owns the mapping from timestamps and
//! `YYYY-MM-DD` strings to that partition key.

use crate::error::{BragError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn date_shape_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap())
}

/// Naive date-time layouts accepted when the timestamp carries no offset.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Year/month/day components of a day partition, already zero-padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayKey {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DayKey {
            year: format!("{:04}", date.year()),
            month: format!("{:02}", date.month()),
            day: format!("{:02}", date.day()),
        }
    }

    /// Split a `YYYY-MM-DD` string into its components without checking that
    /// the date exists on the calendar. Anything else yields `None`.
    pub fn from_date_str(date: &str) -> Option<Self> {
        let captures = date_shape_regex().captures(date)?;
        Some(DayKey {
            year: captures[1].to_string(),
            month: captures[2].to_string(),
            day: captures[3].to_string(),
        })
    }

    /// `root/YYYY/MM/DD.<extension>`
    pub fn file_path(&self, root: &Path, extension: &str) -> PathBuf {
        root.join(&self.year)
            .join(&self.month)
            .join(format!("{}.{}", self.day, extension))
    }
}

/// Calendar date a timestamp belongs to.
///
/// Accepts RFC 3339 (`Z` or a numeric offset), naive ISO-8601 date-times and
/// bare dates. For offset timestamps the date is the one written in the
/// string, not the date after conversion to UTC.
pub fn date_of_timestamp(timestamp: &str) -> Result<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Ok(parsed.date_naive());
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, format) {
            return Ok(parsed.date());
        }
    }

    if date_shape_regex().is_match(timestamp) {
        if let Ok(date) = NaiveDate::parse_from_str(timestamp, "%Y-%m-%d") {
            return Ok(date);
        }
    }

    Err(BragError::InvalidTimestamp(timestamp.to_string()))
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    let key = DayKey::from_date_str(date).ok_or_else(|| BragError::InvalidDate(date.to_string()))?;

    let year = key.year.parse::<i32>();
    let month = key.month.parse::<u32>();
    let day = key.day.parse::<u32>();

    match (year, month, day) {
        (Ok(y), Ok(m), Ok(d)) => {
            NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| BragError::InvalidDate(date.to_string()))
        }
        _ => Err(BragError::InvalidDate(date.to_string())),
    }
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
