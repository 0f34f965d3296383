//! Configuration management
//!
//! Settings live in an optional `~/.brag/config.toml`. The storage root is
//! resolved here once and handed to the repository explicitly.

use crate::error::{BragError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Days shown by `brag list` when `--days` is not given
pub const DEFAULT_DAYS: i64 = 7;

const DEFAULT_EDITOR: &str = "vim";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub editor: Option<String>,
    pub default_days: Option<i64>,
}

impl Config {
    /// Load config from the default location, or defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a TOML file; a missing file means defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(BragError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            BragError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// `BRAG_CONFIG` if set, otherwise `~/.brag/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os("BRAG_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".brag").join("config.toml"))
    }

    /// Storage root: explicit override, then config, then `~/.brag/data`
    pub fn resolve_data_dir(&self, override_dir: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir);
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(".brag").join("data"))
            .ok_or_else(|| {
                BragError::Config(
                    "Could not determine home directory; pass --data-dir".to_string(),
                )
            })
    }

    pub fn default_days(&self) -> i64 {
        self.default_days.unwrap_or(DEFAULT_DAYS)
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .ok()
            .or_else(|| self.editor.clone())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
    }
}
