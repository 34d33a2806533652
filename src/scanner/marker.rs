//! Marker detection
//!
//! A candidate file is flagged when its first line contains `// PRIVATE`
//! anywhere. Only the literal first line counts; no comment parsing.

use std::fs;
use std::path::Path;

use crate::core::error::{EntryError, EntryResult};
use crate::core::file_reader::scan_first_line;
use crate::core::model::Finding;
use crate::core::paths::{display_path, file_name_bytes};

/// Text that marks a file as one that should not be here
pub const MARKER: &str = "// PRIVATE";

/// File name suffixes that make an entry a candidate (case-sensitive)
pub const CANDIDATE_SUFFIXES: [&[u8]; 2] = [b".cpp", b".h"];

/// Whether a file name ends in one of the candidate suffixes
pub fn is_candidate_name(name: &[u8]) -> bool {
    CANDIDATE_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
}

/// Whether an entry should get the first-line check.
///
/// Metadata follows symlinks, so a link to a regular file is checked like the
/// file itself. Directories are passed over. Anything else with a candidate
/// name (fifos, sockets, devices) is reported instead of opened, since opening
/// it could block.
pub fn should_check(path: &Path) -> EntryResult<bool> {
    if !file_name_bytes(path).is_some_and(is_candidate_name) {
        return Ok(false);
    }

    let metadata = fs::metadata(path).map_err(|source| EntryError::Read {
        path: display_path(path),
        source,
    })?;

    if metadata.is_file() {
        Ok(true)
    } else if metadata.is_dir() {
        Ok(false)
    } else {
        Err(EntryError::NotRegularFile {
            path: display_path(path),
        })
    }
}

/// Check a regular file, returning a finding when its first line is marked
pub fn check_file(path: &Path) -> EntryResult<Option<Finding>> {
    let finding = scan_first_line(path, MARKER.as_bytes())?
        .filter(|first| first.contains)
        .map(|first| Finding::new(display_path(path), first.preview));
    Ok(finding)
}
