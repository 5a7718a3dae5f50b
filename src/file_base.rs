/// Returns true for the directory separators recognised on any platform.
/// `/` and `\` are never converted into each other.
const fn is_separator(byte: u8) -> bool {
    byte == b'/' || byte == b'\\'
}

/// Length of `data` up to, but excluding, the first NUL byte.
const fn end_of_string(data: &[u8]) -> usize {
    let mut end = 0;
    while end < data.len() && data[end] != 0 {
        end += 1;
    }
    end
}

/// Byte offset at which the retained suffix of `path` starts.
///
/// Walks backwards from the end of the string and stops on the
/// `directories`-th separator. Returns 0 when there are fewer separators
/// than requested, or when `directories` is 0.
pub const fn file_base_offset(path: &[u8], directories: u32) -> usize {
    if directories == 0 {
        return 0;
    }

    let mut remaining = directories;
    let mut pos = end_of_string(path);
    while pos > 0 {
        pos -= 1;
        if is_separator(path[pos]) {
            remaining -= 1;
            if remaining == 0 {
                return pos;
            }
        }
    }
    0
}

/// Byte-slice form of [`file_base`].
pub const fn file_base_bytes(path: &[u8], directories: u32) -> &[u8] {
    let (_, base) = path.split_at(file_base_offset(path, directories));
    base
}

/// Keep at most `directories` trailing directory separators of `path`.
///
/// The file name is always kept and the cut happens right before a
/// separator, so `file_base("dev/null", 1)` is `"/null"`. A value of 0 means
/// "no truncation" and returns `path` as is, as does asking for more
/// directories than the path contains.
///
/// ```
/// use assert_hash::file_base;
///
/// const BASE: &str = file_base("/Users/todi/assert_hash/build", 2);
/// assert_eq!(BASE, "/assert_hash/build");
/// ```
pub const fn file_base(path: &str, directories: u32) -> &str {
    let (_, base) = path.as_bytes().split_at(file_base_offset(path.as_bytes(), directories));
    // The cut is on an ASCII separator, which is always a char boundary.
    match core::str::from_utf8(base) {
        Ok(base) => base,
        Err(_) => path,
    }
}
