use crate::checksum::{self, LineNumber};
use crate::file_base::file_base_bytes;
use crate::width::{Checksum, Fingerprint, HashWidth};

macro_rules! combined_fn {
    ($ty:ty, $name:ident, $bytes_name:ident, $file_hash:ident, $line_hash:ident) => {
        #[doc = concat!("`", stringify!($ty), "` fingerprint of a file/line pair.")]
        ///
        /// Hashes `file_base(path, directories)` and adds the line checksum,
        /// wrapping on overflow.
        pub const fn $name(path: &str, line: LineNumber, directories: u32) -> $ty {
            $bytes_name(path.as_bytes(), line, directories)
        }

        #[doc = concat!("Byte-path form of [`", stringify!($name), "`].")]
        pub const fn $bytes_name(path: &[u8], line: LineNumber, directories: u32) -> $ty {
            let base = file_base_bytes(path, directories);
            checksum::$file_hash(base).wrapping_add(checksum::$line_hash(line))
        }
    };
}

combined_fn!(u8, file_and_line_hash_u8, file_and_line_hash_bytes_u8, file_hash_u8, line_hash_u8);
combined_fn!(u16, file_and_line_hash_u16, file_and_line_hash_bytes_u16, file_hash_u16, line_hash_u16);
combined_fn!(u32, file_and_line_hash_u32, file_and_line_hash_bytes_u32, file_hash_u32, line_hash_u32);
combined_fn!(u64, file_and_line_hash_u64, file_and_line_hash_bytes_u64, file_hash_u64, line_hash_u64);

/// Width-generic form of the `file_and_line_hash_*` functions.
pub fn file_and_line_hash<T: Checksum>(path: &str, line: LineNumber, directories: u32) -> T {
    file_and_line_hash_bytes(path.as_bytes(), line, directories)
}

/// Width-generic fingerprint of a path given as raw bytes.
pub fn file_and_line_hash_bytes<T: Checksum>(path: &[u8], line: LineNumber, directories: u32) -> T {
    let base = file_base_bytes(path, directories);
    T::file_hash(base).wrapping_add(T::line_hash(line))
}

/// Fingerprint with a width chosen at runtime.
pub fn fingerprint(path: &str, line: LineNumber, directories: u32, width: HashWidth) -> Fingerprint {
    fingerprint_bytes(path.as_bytes(), line, directories, width)
}

/// Runtime-width fingerprint of a path that need not be UTF-8.
pub fn fingerprint_bytes(path: &[u8], line: LineNumber, directories: u32, width: HashWidth) -> Fingerprint {
    match width {
        HashWidth::U8 => Fingerprint::new(file_and_line_hash_bytes::<u8>(path, line, directories)),
        HashWidth::U16 => Fingerprint::new(file_and_line_hash_bytes::<u16>(path, line, directories)),
        HashWidth::U32 => Fingerprint::new(file_and_line_hash_bytes::<u32>(path, line, directories)),
        HashWidth::U64 => Fingerprint::new(file_and_line_hash_bytes::<u64>(path, line, directories)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combines_truncated_path_and_line() {
        let expected = checksum::file_hash_u16(b"/null").wrapping_add(checksum::line_hash_u16(42));
        assert_eq!(file_and_line_hash_u16("dev/null", 42, 1), expected);
    }

    #[test]
    fn test_zero_directories_hashes_full_path() {
        assert_eq!(
            file_and_line_hash_u32("a/b/c.rs", 7, 0),
            checksum::file_hash_u32(b"a/b/c.rs") + 7
        );
    }

    #[test]
    fn test_empty_path_and_line_zero() {
        assert_eq!(file_and_line_hash_u8("", 0, 0), 0);
        assert_eq!(file_and_line_hash_u64("", 0, 3), 0);
        assert_eq!(fingerprint("", 0, 0, HashWidth::U16).value(), 0);
    }

    #[test]
    fn test_final_addition_wraps() {
        // "\u{7f}\u{7f}" sums to 0xfe in one byte lane.
        assert_eq!(file_and_line_hash_u8("\u{7f}\u{7f}", 3, 0), 0x01);
    }

    #[test]
    fn test_generic_matches_const() {
        let path = "/Users/todi/assert_hash/build/main.cpp";
        for line in [0, 1, 17, 0x1234, 0x12345678, u32::MAX] {
            for dirs in [0, 1, 2, 10] {
                assert_eq!(file_and_line_hash::<u8>(path, line, dirs), file_and_line_hash_u8(path, line, dirs));
                assert_eq!(file_and_line_hash::<u16>(path, line, dirs), file_and_line_hash_u16(path, line, dirs));
                assert_eq!(file_and_line_hash::<u32>(path, line, dirs), file_and_line_hash_u32(path, line, dirs));
                assert_eq!(file_and_line_hash::<u64>(path, line, dirs), file_and_line_hash_u64(path, line, dirs));
            }
        }
    }

    #[test]
    fn test_runtime_width_dispatch() {
        let path = "src/lib.rs";
        assert_eq!(fingerprint(path, 9, 0, HashWidth::U8).value(), file_and_line_hash_u8(path, 9, 0) as u64);
        assert_eq!(fingerprint(path, 9, 0, HashWidth::U16).value(), file_and_line_hash_u16(path, 9, 0) as u64);
        assert_eq!(fingerprint(path, 9, 0, HashWidth::U32).value(), file_and_line_hash_u32(path, 9, 0) as u64);
        assert_eq!(fingerprint(path, 9, 0, HashWidth::U64).value(), file_and_line_hash_u64(path, 9, 0));
        for width in HashWidth::ALL {
            assert_eq!(fingerprint(path, 9, 0, width).width(), width);
        }
    }

    #[test]
    fn test_deterministic() {
        for width in HashWidth::ALL {
            let first = fingerprint("c:\\src\\assert.cpp", 120, 1, width);
            let second = fingerprint("c:\\src\\assert.cpp", 120, 1, width);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_adjacent_lines_differ() {
        let first = file_and_line_hash_u16(file!(), line!(), 0);
        let second = file_and_line_hash_u16(file!(), line!(), 0);
        assert_ne!(first, second);
    }

    #[test]
    fn test_byte_path_matches_str_path() {
        let path = "c:\\asda\\asdasd\\asd\\.a.txt";
        assert_eq!(file_and_line_hash_bytes_u32(path.as_bytes(), 5, 2), file_and_line_hash_u32(path, 5, 2));
        assert_eq!(file_and_line_hash_bytes::<u16>(path.as_bytes(), 5, 2), file_and_line_hash_u16(path, 5, 2));
        assert_eq!(fingerprint_bytes(path.as_bytes(), 5, 2, HashWidth::U64), fingerprint(path, 5, 2, HashWidth::U64));
    }

    #[test]
    fn test_non_utf8_byte_path() {
        let path: &[u8] = b"src/bad\xff.cpp";
        let expected = checksum::file_hash_u32(b"/bad\xff.cpp").wrapping_add(checksum::line_hash_u32(3));
        assert_eq!(file_and_line_hash_bytes_u32(path, 3, 1), expected);
        assert_eq!(fingerprint_bytes(path, 3, 1, HashWidth::U32).value(), expected as u64);
    }

    const HASH: u16 = file_and_line_hash_u16("test", 1, 1);
    const _: () = assert!(HASH == checksum::file_hash_u16(b"test") + 1);
}
