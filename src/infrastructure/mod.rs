//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod lock;
pub mod storage;

pub use config::Config;
pub use editor::EditorSession;
pub use lock::{AppendGuard, AppendLock, NoLock};
pub use storage::{BragRepository, FileSystemRepository, DAY_FILE_EXTENSION};
