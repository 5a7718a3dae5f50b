use anyhow::{Context, Result};
use memmap2::Mmap;
use std::borrow::Cow;
use std::path::Path;

/// Memory-map a file for read-only access.
///
/// Returns `None` for an empty file, which has nothing to map.
///
/// # Safety
/// The mapping is read-only. Callers must not concurrently truncate or replace
/// the underlying file while the `Mmap` is live.
pub fn mmap_file(path: &Path) -> Result<Option<Mmap>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("unable to open: \"{}\"", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to read metadata: {}", path.display()))?
        .len();
    if len == 0 {
        return Ok(None);
    }
    // SAFETY: We only read from this mapping; source files are not modified while scanned.
    let map = unsafe {
        Mmap::map(&file).with_context(|| format!("Failed to memory-map file: {}", path.display()))?
    };
    Ok(Some(map))
}

/// The raw bytes of `path`, which are what gets hashed.
#[cfg(unix)]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

/// The bytes of `path`; unpaired surrogates become U+FFFD.
#[cfg(not(unix))]
pub fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(path) => Cow::Borrowed(path.as_bytes()),
        Cow::Owned(path) => Cow::Owned(path.into_bytes()),
    }
}
