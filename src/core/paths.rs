//! Path display utilities
//!
//! Paths are reported exactly as the traversal produced them, so a scan of `.`
//! reports `./src/a.cpp`.

use std::path::Path;

/// Render a traversal path for output
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Raw bytes of a path's file name, valid UTF-8 or not
pub fn file_name_bytes(path: &Path) -> Option<&[u8]> {
    path.file_name().map(|name| name.as_encoded_bytes())
}
