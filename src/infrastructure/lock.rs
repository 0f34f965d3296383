//! Append locking strategies
//!
//! Appends are lock-free by default: one short line written to a file opened
//! in append mode is not torn by the OS, but concurrent writers to the same
//! day file may interleave their lines. A strategy that needs cross-process
//! exclusion can be injected through [`AppendLock`].

use crate::error::Result;
use std::fmt::Debug;
use std::path::Path;

/// Held while one line is appended; dropping it releases the lock.
pub trait AppendGuard {}

impl AppendGuard for () {}

/// Strategy consulted before every append to a day file.
pub trait AppendLock: Debug {
    fn acquire(&self, path: &Path) -> Result<Box<dyn AppendGuard>>;
}

/// Lock-free appends.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLock;

impl AppendLock for NoLock {
    fn acquire(&self, _path: &Path) -> Result<Box<dyn AppendGuard>> {
        Ok(Box::new(()))
    }
}
