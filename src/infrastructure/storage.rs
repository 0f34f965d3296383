//! File system storage for brag entries
//!
//! Layout: `<root>/<YYYY>/<MM>/<DD>.jsonl`, one file per calendar day, one
//! encoded entry per line. The directory tree is the only index; every query
//! reads straight from disk.

use crate::domain::{self, DayKey, Entry};
use crate::error::{BragError, Result};
use crate::infrastructure::lock::{AppendLock, NoLock};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Extension of day files.
pub const DAY_FILE_EXTENSION: &str = "jsonl";

/// Abstract store of brag entries partitioned by day
pub trait BragRepository {
    /// Get the root directory of this store
    fn root(&self) -> &Path;

    /// Append an entry to the day file its timestamp belongs to
    fn add_entry(&self, entry: &Entry) -> Result<()>;

    /// All entries of one `YYYY-MM-DD` day, in append order.
    /// A missing day file or a malformed date yields an empty list.
    fn get_entries(&self, date: &str) -> Result<Vec<Entry>>;

    /// Entries of every day from `start_date` to `end_date` inclusive,
    /// ordered by day and then by append order.
    fn get_entries_range(&self, start_date: &str, end_date: &str) -> Result<Vec<Entry>>;

    /// Every `YYYY-MM-DD` with a day file present, sorted ascending.
    fn list_available_dates(&self) -> Result<Vec<String>>;
}

/// File system implementation of BragRepository
#[derive(Debug)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    lock: Box<dyn AppendLock>,
}

impl FileSystemRepository {
    /// Create a repository with lock-free appends
    pub fn new(root: PathBuf) -> Self {
        Self::with_lock(root, Box::new(NoLock))
    }

    /// Create a repository that consults `lock` before every append
    pub fn with_lock(root: PathBuf, lock: Box<dyn AppendLock>) -> Self {
        FileSystemRepository { root, lock }
    }

    /// Day file that holds entries stamped with `timestamp`
    pub fn path_for(&self, timestamp: &str) -> Result<PathBuf> {
        let date = domain::date_of_timestamp(timestamp)?;
        Ok(DayKey::from_date(date).file_path(&self.root, DAY_FILE_EXTENSION))
    }

    fn read_day_file(path: &Path) -> Result<Vec<Entry>> {
        let contents = fs::read_to_string(path)?;
        let mut entries = Vec::new();

        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let entry = domain::decode(line).map_err(|e| match e {
                BragError::Decode(msg) => {
                    BragError::Decode(format!("{}:{}: {}", path.display(), idx + 1, msg))
                }
                other => other,
            })?;
            entries.push(entry);
        }

        debug!(path = %path.display(), count = entries.len(), "read day file");
        Ok(entries)
    }

    fn date_from_relative_path(rel: &Path) -> Option<String> {
        let parts: Vec<&str> = rel
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        let [year, month, file] = parts.as_slice() else {
            return None;
        };
        let day = file.strip_suffix(DAY_FILE_EXTENSION)?.strip_suffix('.')?;
        Some(format!("{}-{}-{}", year, month, day))
    }
}

impl BragRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn add_entry(&self, entry: &Entry) -> Result<()> {
        let path = self.path_for(&entry.timestamp)?;
        let line = domain::encode(entry)?;

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _guard = self.lock.acquire(&path)?;
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(format!("{}\n", line).as_bytes())?;

        debug!(path = %path.display(), timestamp = %entry.timestamp, "appended entry");
        Ok(())
    }

    fn get_entries(&self, date: &str) -> Result<Vec<Entry>> {
        let Some(key) = DayKey::from_date_str(date) else {
            return Ok(Vec::new());
        };
        let path = key.file_path(&self.root, DAY_FILE_EXTENSION);

        if !path.exists() {
            return Ok(Vec::new());
        }

        Self::read_day_file(&path)
    }

    fn get_entries_range(&self, start_date: &str, end_date: &str) -> Result<Vec<Entry>> {
        let start = domain::parse_date(start_date)?;
        let end = domain::parse_date(end_date)?;

        let mut entries = Vec::new();
        for day in start.iter_days().take_while(|day| *day <= end) {
            let date = domain::format_date(day);
            trace!(date = %date, "reading range day");
            entries.extend(self.get_entries(&date)?);
        }

        Ok(entries)
    }

    fn list_available_dates(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .min_depth(3)
            .max_depth(3);

        let mut dates = Vec::new();
        for entry in walker {
            let path = match entry {
                Ok(entry) if entry.file_type().is_file() => entry.into_path(),
                Ok(_) => continue,
                // A day file whose link target is gone still names a day
                Err(err) if is_dangling_day_file(&err) => match err.path() {
                    Some(path) => path.to_path_buf(),
                    None => continue,
                },
                Err(err) => return Err(std::io::Error::from(err).into()),
            };
            let Ok(rel) = path.strip_prefix(&self.root) else {
                continue;
            };
            if let Some(date) = Self::date_from_relative_path(rel) {
                dates.push(date);
            }
        }

        dates.sort();
        Ok(dates)
    }
}

fn is_dangling_day_file(err: &walkdir::Error) -> bool {
    err.depth() == 3
        && err
            .io_error()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}
