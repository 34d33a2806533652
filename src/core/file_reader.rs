//! First-line scanning
//!
//! Only the first line of a candidate file is ever inspected. The line is
//! streamed in fixed-size chunks until the first newline or EOF, so memory
//! stays bounded however long the line is. A needle that straddles two chunks
//! is still found because the tail of each chunk is carried into the next.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::core::error::{EntryError, EntryResult};
use crate::core::paths::display_path;

/// Size of each read while streaming the first line (8 KB)
pub const READ_CHUNK_BYTES: usize = 8 * 1024;

/// How much of the first line is kept for reporting
pub const LINE_PREVIEW_BYTES: usize = 256;

/// What was learned from a file's first line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstLine {
    /// Whether the needle occurs anywhere in the line
    pub contains: bool,

    /// Start of the line without its terminator, at most `LINE_PREVIEW_BYTES`,
    /// decoded lossily
    pub preview: String,
}

/// Scan the first line of `path` for `needle`.
///
/// Returns `Ok(None)` for an empty file. The file handle is dropped before
/// returning.
pub fn scan_first_line(path: &Path, needle: &[u8]) -> EntryResult<Option<FirstLine>> {
    let file = File::open(path).map_err(|source| read_error(path, source))?;
    first_line_from(file, needle).map_err(|source| read_error(path, source))
}

/// Scan the first line from any reader
pub fn first_line_from<R: Read>(
    mut reader: R,
    needle: &[u8],
) -> std::io::Result<Option<FirstLine>> {
    let finder = memchr::memmem::Finder::new(needle);
    let keep = needle.len().saturating_sub(1);

    let mut buf = vec![0u8; READ_CHUNK_BYTES];
    let mut window: Vec<u8> = Vec::with_capacity(keep + READ_CHUNK_BYTES);
    let mut preview: Vec<u8> = Vec::new();
    let mut seen_any = false;
    let mut contains = needle.is_empty();

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        seen_any = true;

        let chunk = &buf[..n];
        let newline = memchr::memchr(b'\n', chunk);
        let line_part = &chunk[..newline.unwrap_or(n)];

        if preview.len() < LINE_PREVIEW_BYTES {
            let room = LINE_PREVIEW_BYTES - preview.len();
            preview.extend_from_slice(&line_part[..line_part.len().min(room)]);
        }

        if !contains {
            window.extend_from_slice(line_part);
            contains = finder.find(&window).is_some();
            let tail_start = window.len().saturating_sub(keep);
            window.drain(..tail_start);
        }

        if newline.is_some() {
            break;
        }
    }

    if !seen_any {
        return Ok(None);
    }

    if preview.last() == Some(&b'\r') {
        preview.pop();
    }

    Ok(Some(FirstLine {
        contains,
        preview: String::from_utf8_lossy(&preview).into_owned(),
    }))
}

fn read_error(path: &Path, source: std::io::Error) -> EntryError {
    EntryError::Read {
        path: display_path(path),
        source,
    }
}
