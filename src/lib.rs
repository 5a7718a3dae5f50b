//! Short, stable fingerprints for source locations.
//!
//! A fingerprint is the checksum of a (possibly truncated) file path plus the
//! checksum of a line number, in an 8, 16, 32 or 64 bit accumulator. All of
//! the core functions are `const fn`, so a call site can bake its own
//! identifier into the binary:
//!
//! ```
//! const ID: u32 = assert_hash::assert_hash!(u32, 1);
//! assert_eq!(ID, assert_hash::file_and_line_hash_u32(file!(), line!() - 1, 1));
//! ```
//!
//! The `assert-hashes` binary scans a source file for assertion markers and
//! prints the table mapping each fingerprint back to `file:line`.

pub mod checksum;
pub mod file_base;
pub mod fingerprint;
pub mod width;

pub use checksum::{
    file_hash_u16, file_hash_u32, file_hash_u64, file_hash_u8, line_hash_u16, line_hash_u32,
    line_hash_u64, line_hash_u8, LineNumber,
};
pub use file_base::{file_base, file_base_bytes};
pub use fingerprint::{
    file_and_line_hash, file_and_line_hash_bytes, file_and_line_hash_bytes_u16,
    file_and_line_hash_bytes_u32, file_and_line_hash_bytes_u64, file_and_line_hash_bytes_u8,
    file_and_line_hash_u16, file_and_line_hash_u32, file_and_line_hash_u64, file_and_line_hash_u8,
    fingerprint, fingerprint_bytes,
};
pub use width::{Checksum, Fingerprint, HashWidth, UnsupportedWidth};

/// Compile-time fingerprint of the invocation site.
///
/// `assert_hash!(u16)` hashes `file!()` and `line!()` in a `u16`;
/// `assert_hash!(u16, 2)` keeps only the last two directories of the path,
/// matching `assert-hashes -s 2 -d 2`.
#[macro_export]
macro_rules! assert_hash {
    (u8 $(, $dirs:expr)?) => {
        $crate::assert_hash!(@at file_and_line_hash_u8, u8 $(, $dirs)?)
    };
    (u16 $(, $dirs:expr)?) => {
        $crate::assert_hash!(@at file_and_line_hash_u16, u16 $(, $dirs)?)
    };
    (u32 $(, $dirs:expr)?) => {
        $crate::assert_hash!(@at file_and_line_hash_u32, u32 $(, $dirs)?)
    };
    (u64 $(, $dirs:expr)?) => {
        $crate::assert_hash!(@at file_and_line_hash_u64, u64 $(, $dirs)?)
    };
    (@at $hash:ident, $ty:ty) => {
        $crate::assert_hash!(@at $hash, $ty, 0)
    };
    (@at $hash:ident, $ty:ty, $dirs:expr) => {{
        const HASH: $ty = $crate::$hash(file!(), line!(), $dirs);
        HASH
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macro_matches_function() {
        let (hash, line) = (assert_hash!(u16), line!());
        assert_eq!(hash, crate::file_and_line_hash_u16(file!(), line, 0));
    }

    #[test]
    fn test_macro_with_directories() {
        let (hash, line) = (assert_hash!(u64, 1), line!());
        assert_eq!(hash, crate::file_and_line_hash_u64("/lib.rs", line, 0));
    }

    #[test]
    fn test_macro_adjacent_lines_differ() {
        const HASH1: u16 = assert_hash!(u16);
        const HASH2: u16 = assert_hash!(u16);
        assert_ne!(HASH1, HASH2);
    }

    #[test]
    fn test_macro_all_widths() {
        let line = line!() + 1;
        let hashes = (assert_hash!(u8), assert_hash!(u16), assert_hash!(u32), assert_hash!(u64));
        assert_eq!(hashes.0, crate::file_and_line_hash_u8(file!(), line, 0));
        assert_eq!(hashes.1, crate::file_and_line_hash_u16(file!(), line, 0));
        assert_eq!(hashes.2, crate::file_and_line_hash_u32(file!(), line, 0));
        assert_eq!(hashes.3, crate::file_and_line_hash_u64(file!(), line, 0));
    }
}
