//! Position-weighted byte checksum and chunked line checksum.
//!
//! Both fold their input into a fixed-width accumulator with wrapping
//! addition. Byte `i` of a string is shifted left by `8 * (i mod N)` bits,
//! where `N` is the accumulator size in bytes, so every byte lands in one of
//! the accumulator's byte lanes. Line numbers are split into accumulator-wide
//! little-endian chunks which are summed.
//!
//! One set of functions exists per width so all of them stay `const fn`.

/// Source line number, as produced by `line!()`.
pub type LineNumber = u32;

macro_rules! checksum_fns {
    ($ty:ty, $file_hash:ident, $line_hash:ident) => {
        #[doc = concat!("Checksum of `data` in a `", stringify!($ty), "` accumulator.")]
        ///
        /// Hashing stops at the first NUL byte, which is not included.
        pub const fn $file_hash(data: &[u8]) -> $ty {
            const LANES: usize = core::mem::size_of::<$ty>();

            let mut value: $ty = 0;
            let mut i = 0;
            while i < data.len() && data[i] != 0 {
                let exponent = (i % LANES) as u32;
                value = value.wrapping_add((data[i] as $ty) << (8 * exponent));
                i += 1;
            }
            value
        }

        #[doc = concat!("Wrapping sum of the `", stringify!($ty), "`-wide chunks of `line`.")]
        pub const fn $line_hash(line: LineNumber) -> $ty {
            let mut value: $ty = 0;
            let mut rest = line;
            while rest != 0 {
                value = value.wrapping_add(rest as $ty);
                // Shifting by the full width of `LineNumber` leaves nothing.
                rest = match rest.checked_shr(<$ty>::BITS) {
                    Some(rest) => rest,
                    None => 0,
                };
            }
            value
        }
    };
}

checksum_fns!(u8, file_hash_u8, line_hash_u8);
checksum_fns!(u16, file_hash_u16, line_hash_u16);
checksum_fns!(u32, file_hash_u32, line_hash_u32);
checksum_fns!(u64, file_hash_u64, line_hash_u64);
