//! Directory traversal
//!
//! Uses walkdir for a depth-first, pre-order walk with siblings sorted by name,
//! so two runs over an unchanged tree visit entries in the same order.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::error::{EntryError, EntryResult};
use crate::core::paths::display_path;

/// Lazily walk every entry under `root`, the root itself included.
///
/// Symlinked directories below the root are not descended into. Entries that
/// cannot be walked surface as `EntryError::Walk` items and the walk goes on.
pub fn walk_entries(root: &Path) -> impl Iterator<Item = EntryResult<DirEntry>> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(walk_error))
}

fn walk_error(err: walkdir::Error) -> EntryError {
    let path = err
        .path()
        .map(display_path)
        .unwrap_or_else(|| "<unknown>".to_string());
    let reason = match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    };
    EntryError::Walk { path, reason }
}
