//! Scan error taxonomy
//!
//! `ScanError` stops a scan before it starts. `EntryError` concerns a single
//! entry and never aborts the traversal.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("root '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("root '{}' is not a directory", .0.display())]
    RootNotDirectory(PathBuf),
}

#[derive(Debug, Error)]
pub enum EntryError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk '{path}': {reason}")]
    Walk { path: String, reason: String },

    #[error("'{path}' is not a regular file")]
    NotRegularFile { path: String },
}

impl EntryError {
    /// Path of the entry the error concerns
    pub fn path(&self) -> &str {
        match self {
            EntryError::Read { path, .. }
            | EntryError::Walk { path, .. }
            | EntryError::NotRegularFile { path } => path,
        }
    }

    /// Short cause, without the path
    pub fn reason(&self) -> String {
        match self {
            EntryError::Read { source, .. } => source.to_string(),
            EntryError::Walk { reason, .. } => reason.clone(),
            EntryError::NotRegularFile { .. } => "not a regular file".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

pub type EntryResult<T> = std::result::Result<T, EntryError>;
