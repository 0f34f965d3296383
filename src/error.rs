//! Error types for brag

use thiserror::Error;

/// Main error type for brag application
#[derive(Debug, Error)]
pub enum BragError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Failed to decode entry: {0}")]
    Decode(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Empty content, aborting.")]
    EmptyContent,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),
}

impl BragError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BragError::InvalidTimestamp(_) | BragError::InvalidDate(_) => 3,
            BragError::Decode(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BragError::InvalidDate(value) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\n\
                    Examples:\n\
                    brag list --date 2023-01-01\n\
                    brag export --start 2023-01-01 --end 2023-01-31",
                    value
                )
            }
            BragError::InvalidTimestamp(value) => {
                format!(
                    "Invalid timestamp: '{}'\n\n\
                    Timestamps are ISO-8601 in UTC, e.g. 2023-01-01T12:00:00Z",
                    value
                )
            }
            BragError::Decode(msg) => {
                format!(
                    "Failed to decode entry: {}\n\n\
                    Suggestions:\n\
                    • The day file holds one JSON object per line\n\
                    • Each line needs string 'content' and 'timestamp' fields\n\
                    • Fix or remove the offending line and retry",
                    msg
                )
            }
            BragError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Set 'editor' in ~/.brag/config.toml",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BragError
pub type Result<T> = std::result::Result<T, BragError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_suggestion() {
        let err = BragError::InvalidDate("2023-13-01".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("brag list --date"));
        assert!(msg.contains("2023-13-01"));
    }

    #[test]
    fn test_decode_suggestions() {
        let err = BragError::Decode("2023/01/01.jsonl:3: missing field `content`".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("2023/01/01.jsonl:3"));
        assert!(msg.contains("one JSON object per line"));
    }

    #[test]
    fn test_editor_error_suggestions() {
        let err = BragError::Editor("Editor not found".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("EDITOR environment variable"));
        assert!(msg.contains("config.toml"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(BragError::InvalidDate("x".into()).exit_code(), 3);
        assert_eq!(BragError::InvalidTimestamp("x".into()).exit_code(), 3);
        assert_eq!(BragError::Decode("x".into()).exit_code(), 4);
        assert_eq!(BragError::EmptyContent.exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = BragError::Config("bad key".to_string());
        assert_eq!(err.display_with_suggestions(), "Configuration error: bad key");
    }
}
