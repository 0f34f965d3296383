//! Brag entry model

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One recorded accomplishment.
///
/// Field order is the on-disk key order. `project: None` is written as
/// `null` and stays distinct from `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub project: Option<String>,
}

impl Entry {
    /// Create an entry stamped with the current UTC time
    pub fn new(content: impl Into<String>) -> Self {
        Entry {
            content: content.into(),
            timestamp: utc_timestamp(Utc::now()),
            tags: Vec::new(),
            project: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project;
        self
    }

    /// The `YYYY-MM-DD` prefix of the timestamp, used for grouping output.
    pub fn day(&self) -> &str {
        self.timestamp
            .split_once('T')
            .map(|(day, _)| day)
            .unwrap_or(&self.timestamp)
    }
}

/// `YYYY-MM-DDTHH:MM:SS[.ffffff]Z`, dropping the fraction when the
/// microsecond component is zero.
pub fn utc_timestamp(now: DateTime<Utc>) -> String {
    let precision = if now.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    now.to_rfc3339_opts(precision, true)
}
