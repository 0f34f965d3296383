//! brag - Personal accomplishment log
//!
//! A command-line tool that records short dated notes about what you did,
//! stores them as JSON lines partitioned by calendar day, and retrieves them
//! by day, by date range, or as a full export.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::Entry;
pub use error::BragError;
pub use infrastructure::{BragRepository, FileSystemRepository};
