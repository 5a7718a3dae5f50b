use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::checksum::{self, LineNumber};

/// Accumulator width of a fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashWidth {
    U8,
    U16,
    #[default]
    U32,
    U64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported hash size: \"{0}\"")]
pub struct UnsupportedWidth(pub u32);

impl HashWidth {
    pub const ALL: [HashWidth; 4] = [HashWidth::U8, HashWidth::U16, HashWidth::U32, HashWidth::U64];

    /// Width from a size in bytes (1, 2, 4 or 8).
    pub const fn from_bytes(bytes: u32) -> Result<Self, UnsupportedWidth> {
        match bytes {
            1 => Ok(HashWidth::U8),
            2 => Ok(HashWidth::U16),
            4 => Ok(HashWidth::U32),
            8 => Ok(HashWidth::U64),
            other => Err(UnsupportedWidth(other)),
        }
    }

    pub const fn bytes(self) -> u32 {
        match self {
            HashWidth::U8 => 1,
            HashWidth::U16 => 2,
            HashWidth::U32 => 4,
            HashWidth::U64 => 8,
        }
    }

    pub const fn bits(self) -> u32 {
        self.bytes() * 8
    }

    /// Number of hex digits needed to print any value of this width.
    pub const fn hex_digits(self) -> usize {
        self.bytes() as usize * 2
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned integer types usable as a checksum accumulator.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. Every method delegates to
/// the `const fn` of the matching width, so generic and const callers always
/// agree.
pub trait Checksum: sealed::Sealed + Copy + Eq + fmt::Debug {
    const WIDTH: HashWidth;

    fn file_hash(data: &[u8]) -> Self;
    fn line_hash(line: LineNumber) -> Self;
    fn wrapping_add(self, other: Self) -> Self;
    fn into_u64(self) -> u64;
}

macro_rules! impl_checksum {
    ($ty:ty, $width:expr, $file_hash:path, $line_hash:path) => {
        impl Checksum for $ty {
            const WIDTH: HashWidth = $width;

            #[inline]
            fn file_hash(data: &[u8]) -> Self {
                $file_hash(data)
            }

            #[inline]
            fn line_hash(line: LineNumber) -> Self {
                $line_hash(line)
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                <$ty>::wrapping_add(self, other)
            }

            #[inline]
            fn into_u64(self) -> u64 {
                self as u64
            }
        }
    };
}

impl_checksum!(u8, HashWidth::U8, checksum::file_hash_u8, checksum::line_hash_u8);
impl_checksum!(u16, HashWidth::U16, checksum::file_hash_u16, checksum::line_hash_u16);
impl_checksum!(u32, HashWidth::U32, checksum::file_hash_u32, checksum::line_hash_u32);
impl_checksum!(u64, HashWidth::U64, checksum::file_hash_u64, checksum::line_hash_u64);

/// A fingerprint whose width was picked at runtime.
///
/// `value` never exceeds the range of `width`. Displays as `0x` followed by
/// zero-padded lowercase hex, two digits per byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    value: u64,
    width: HashWidth,
}

impl Fingerprint {
    pub fn new<T: Checksum>(value: T) -> Self {
        Self {
            value: value.into_u64(),
            width: T::WIDTH,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn width(&self) -> HashWidth {
        self.width
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:0digits$x}", self.value, digits = self.width.hex_digits())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
