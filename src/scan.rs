use anyhow::Result;
use assert_hash::LineNumber;
use std::path::Path;
use tracing::debug;

use crate::util;

/// Byte-wise substring test. An empty marker matches every line.
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

/// 1-based number of the line at `index`, wrapping past `LineNumber::MAX`.
fn line_number(index: usize) -> LineNumber {
    (index as LineNumber).wrapping_add(1)
}

/// 1-based numbers of the lines of `data` that contain any of `markers`.
///
/// Lines are separated by `\n`; a final newline does not start another line.
/// A line containing several markers is reported once.
pub fn matching_lines<M: AsRef<[u8]>>(data: &[u8], markers: &[M]) -> Vec<LineNumber> {
    if data.is_empty() {
        return Vec::new();
    }
    let body = data.strip_suffix(b"\n").unwrap_or(data);

    body.split(|&byte| byte == b'\n')
        .enumerate()
        .filter(|(_, line)| markers.iter().any(|marker| contains(line, marker.as_ref())))
        .map(|(index, _)| line_number(index))
        .collect()
}

/// Map `path` and return the lines that contain a marker.
pub fn scan_file<M: AsRef<[u8]>>(path: &Path, markers: &[M]) -> Result<Vec<LineNumber>> {
    let map = util::mmap_file(path)?;
    let data: &[u8] = map.as_deref().unwrap_or(&[]);
    let lines = matching_lines(data, markers);
    debug!(
        file = %path.display(),
        bytes = data.len(),
        matches = lines.len(),
        "scanned source file"
    );
    Ok(lines)
}
