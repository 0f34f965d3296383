//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brag")]
#[command(about = "Keep a dated log of your accomplishments", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory path (default: ~/.brag/data)
    #[arg(long, global = true, env = "BRAG_DATA_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new brag
    Add {
        /// Content of the brag (prompted for when omitted)
        content: Vec<String>,

        /// Tags
        #[arg(long, num_args = 1..)]
        tags: Vec<String>,

        /// Project name
        #[arg(long)]
        project: Option<String>,

        /// Open editor
        #[arg(long)]
        edit: bool,
    },

    /// List brags
    List {
        /// Number of days to show
        #[arg(long, allow_negative_numbers = true)]
        days: Option<i64>,

        /// Specific date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Export brags
    Export {
        /// Start date (YYYY-MM-DD, default: earliest brag)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD, default: today)
        #[arg(long)]
        end: Option<String>,

        /// Output format (json, markdown, text)
        #[arg(long, default_value = "json")]
        format: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_metadata() {
        let cli = Cli::try_parse_from([
            "brag", "add", "Fixed", "the", "bug", "--tags", "rust", "perf", "--project", "core",
        ])
        .unwrap();

        match cli.command {
            Commands::Add {
                content,
                tags,
                project,
                edit,
            } => {
                assert_eq!(content, vec!["Fixed", "the", "bug"]);
                assert_eq!(tags, vec!["rust", "perf"]);
                assert_eq!(project.as_deref(), Some("core"));
                assert!(!edit);
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["brag", "list", "--data-dir", "/tmp/brags"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/brags")));
    }

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::try_parse_from(["brag", "export"]).unwrap();
        match cli.command {
            Commands::Export { start, end, format } => {
                assert_eq!(start, None);
                assert_eq!(end, None);
                assert_eq!(format, "json");
            }
            other => panic!("Expected Export, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_export_format_left_to_export_format() {
        let cli = Cli::try_parse_from(["brag", "export", "--format", "csv"]).unwrap();
        match cli.command {
            Commands::Export { format, .. } => {
                assert_eq!(format, "csv");
                assert!(format.parse::<crate::application::ExportFormat>().is_err());
            }
            other => panic!("Expected Export, got {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["brag"]).is_err());
    }
}
