//! Export brags use case

use crate::domain::{format_date, Entry};
use crate::error::Result;
use crate::infrastructure::BragRepository;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Output format of `brag export`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Markdown,
    Text,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(format!(
                "Invalid export format: '{}'. Valid formats are: json, markdown, text",
                s
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "markdown",
            ExportFormat::Text => "text",
        };
        f.write_str(name)
    }
}

/// Service for exporting brags over a date range
pub struct ExportBragsService<R: BragRepository> {
    repository: R,
}

impl<R: BragRepository> ExportBragsService<R> {
    /// Create a new export service
    pub fn new(repository: R) -> Self {
        ExportBragsService { repository }
    }

    /// Entries from `start` to `end` inclusive.
    ///
    /// Without `start` the export begins at the earliest day on disk, and
    /// `None` means the store holds no days at all. Without `end` it runs
    /// through `today`.
    pub fn execute(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
    ) -> Result<Option<Vec<Entry>>> {
        let start = match start {
            Some(start) => start.to_string(),
            None => match self.repository.list_available_dates()?.into_iter().next() {
                Some(earliest) => earliest,
                None => return Ok(None),
            },
        };

        let end = end
            .map(str::to_string)
            .unwrap_or_else(|| format_date(today));

        self.repository.get_entries_range(&start, &end).map(Some)
    }
}
