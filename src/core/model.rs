//! Scan result model
//!
//! Every scan produces a `ScanReport`; renderers only ever see this model.

use serde::{Deserialize, Serialize};

use crate::core::error::EntryError;

/// A candidate file whose first line carries the marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Path exactly as produced by the traversal
    pub path: String,

    /// Start of the file's first line, cut to a short preview
    pub line: String,
}

impl Finding {
    pub fn new(path: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line: line.into(),
        }
    }

    /// The warning emitted for this finding
    pub fn warning(&self) -> String {
        format!("{} should not be here", self.path)
    }
}

/// An entry the scan could not inspect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub path: String,
    pub reason: String,
}

impl SkippedEntry {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl From<EntryError> for SkippedEntry {
    fn from(err: EntryError) -> Self {
        Self::new(err.path(), err.reason())
    }
}

/// Outcome of one traversal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Root the traversal started from
    pub root: String,

    /// Flagged files, in traversal order
    pub findings: Vec<Finding>,

    /// Entries skipped because they could not be walked or read
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedEntry>,

    /// Number of candidate files whose first line was inspected
    pub files_checked: usize,

    /// Number of entries yielded by the traversal, directories included
    pub entries_visited: usize,
}

impl ScanReport {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}
