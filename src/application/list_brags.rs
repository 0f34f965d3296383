//! List brags use case

use crate::domain::{format_date, Entry};
use crate::error::{BragError, Result};
use crate::infrastructure::BragRepository;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Entries that share a calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub date: String,
    pub entries: Vec<Entry>,
}

/// Group entries by the date prefix of their timestamp, days ascending.
/// Order within a day is preserved.
pub fn group_by_day(entries: Vec<Entry>) -> Vec<DayGroup> {
    let mut by_day: BTreeMap<String, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        by_day.entry(entry.day().to_string()).or_default().push(entry);
    }

    by_day
        .into_iter()
        .map(|(date, entries)| DayGroup { date, entries })
        .collect()
}

/// Service for listing recorded brags
pub struct ListBragsService<R: BragRepository> {
    repository: R,
}

impl<R: BragRepository> ListBragsService<R> {
    /// Create a new list service
    pub fn new(repository: R) -> Self {
        ListBragsService { repository }
    }

    /// Entries of a single `YYYY-MM-DD` day, headed by that date as given
    pub fn for_date(&self, date: &str) -> Result<Vec<DayGroup>> {
        let entries = self.repository.get_entries(date)?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![DayGroup {
            date: date.to_string(),
            entries,
        }])
    }

    /// Entries from `days` days before `today` through `today`
    pub fn recent(&self, days: i64, today: NaiveDate) -> Result<Vec<DayGroup>> {
        let start = Duration::try_days(days)
            .and_then(|span| today.checked_sub_signed(span))
            .ok_or_else(|| BragError::InvalidDate(format!("{} days before {}", days, today)))?;

        let entries = self
            .repository
            .get_entries_range(&format_date(start), &format_date(today))?;

        Ok(group_by_day(entries))
    }
}
