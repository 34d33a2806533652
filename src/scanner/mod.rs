//! Scanner module - Walks a tree and flags marked C++ sources
//!
//! Provides:
//! - walk: sorted depth-first traversal
//! - marker: candidate filter and first-line check
//!
//! Per-entry failures never abort a scan; they are collected as skipped
//! entries on the report.

pub mod marker;
pub mod walk;

use std::path::Path;

use crate::core::error::{Result, ScanError};
use crate::core::model::{Finding, ScanReport};
use crate::core::paths::display_path;

/// Scan every entry under `root` and collect findings in traversal order.
///
/// `on_finding` is called for each finding as soon as it is found, before the
/// walk moves on.
pub fn scan_tree<F>(root: &Path, mut on_finding: F) -> Result<ScanReport>
where
    F: FnMut(&Finding),
{
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::RootNotDirectory(root.to_path_buf()));
    }

    let mut report = ScanReport::new(display_path(root));

    for entry in walk::walk_entries(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                report.skipped.push(err.into());
                continue;
            }
        };
        report.entries_visited += 1;

        let path = entry.path();
        match marker::should_check(path) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(err) => {
                report.skipped.push(err.into());
                continue;
            }
        }

        report.files_checked += 1;
        match marker::check_file(path) {
            Ok(Some(finding)) => {
                on_finding(&finding);
                report.findings.push(finding);
            }
            Ok(None) => {}
            Err(err) => report.skipped.push(err.into()),
        }
    }

    Ok(report)
}
