use crc_any::{CRCu16, CRCu32};

use crate::checksum::{Checksum, Width};

/// Calculates a CRC-16
///
/// This CRC has a generator polynomial x^16 + x^15 + x^2 + 1 (0x8005), processed reflected, and is
/// also known as "ARC" or "CRC-16/IBM"
/// Initial value is 0x0000, and the result is not inverted
pub fn calc_crc16(data: &[u8]) -> u16 {
    let mut crc = CRCu16::crc16();
    crc.digest(data);
    crc.get_crc()
}

/// Calculates a CRC-32
///
/// This CRC is the ISO 3309 CRC (polynomial 0x04C11DB7, reflected, initial value and final xor
/// 0xFFFFFFFF), the same one used by zip, gzip and ethernet
pub fn calc_crc32(data: &[u8]) -> u32 {
    let mut crc = CRCu32::crc32();
    crc.digest(data);
    crc.get_crc()
}

/// A CRC width known at compile time
///
/// This ties each width to the integer type its checksum is stored in, so asking for a 32-bit
/// checksum as a `u16` doesn't type check.
pub trait CrcWidth {
    const WIDTH: Width;

    type Value: Copy + Into<Checksum> + std::fmt::LowerHex;

    fn calc(data: &[u8]) -> Self::Value;
}

/// Marker for the 16-bit CRC
#[derive(Debug, Clone, Copy)]
pub enum Crc16 {}

/// Marker for the 32-bit CRC
#[derive(Debug, Clone, Copy)]
pub enum Crc32 {}

impl CrcWidth for Crc16 {
    const WIDTH: Width = Width::Crc16;
    type Value = u16;

    fn calc(data: &[u8]) -> u16 {
        calc_crc16(data)
    }
}

impl CrcWidth for Crc32 {
    const WIDTH: Width = Width::Crc32;
    type Value = u32;

    fn calc(data: &[u8]) -> u32 {
        calc_crc32(data)
    }
}

/// Calculates the CRC of `data` with a width picked at compile time
///
/// ```
/// use crcxx::{crc, Crc16, Crc32};
///
/// let a: u32 = crc::<Crc32>(b"123456789");
/// let b: u16 = crc::<Crc16>(b"123456789");
/// assert_eq!(a, 0xcbf43926);
/// assert_eq!(b, 0xbb3d);
/// ```
pub fn crc<W: CrcWidth>(data: &[u8]) -> W::Value {
    W::calc(data)
}

/// Like [`crc`], but returns a lowercase hex string padded to `W::WIDTH.hex_digits()` characters
pub fn crc_hex<W: CrcWidth>(data: &[u8]) -> String {
    format!(
        "{:0width$x}",
        W::calc(data),
        width = W::WIDTH.hex_digits()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc16() {
        let crc = calc_crc16(b"123456789");
        assert_eq!(crc, 0xbb3d, "crc16: {:x}", crc);
    }

    #[test]
    fn test_crc32() {
        let crc = calc_crc32(b"123456789");
        assert_eq!(crc, 0xcbf43926, "crc32: {:x}", crc);
    }

    #[test]
    fn test_empty() {
        assert_eq!(calc_crc16(b""), 0);
        assert_eq!(calc_crc32(b""), 0);
    }

    #[test]
    fn test_known_values() {
        // single byte and short ascii inputs, cross-checked with zlib and boost::crc
        assert_eq!(calc_crc32(b"a"), 0xe8b7be43);
        assert_eq!(calc_crc32(b"abc"), 0x352441c2);
        assert_eq!(
            calc_crc32(b"The quick brown fox jumps over the lazy dog"),
            0x414fa339
        );
        assert_eq!(calc_crc16(b"A"), 0x30c0);
    }

    #[test]
    fn test_generic() {
        assert_eq!(crc::<Crc16>(b"hello"), calc_crc16(b"hello"));
        assert_eq!(crc::<Crc32>(b"hello"), calc_crc32(b"hello"));
        assert_eq!(crc_hex::<Crc32>(b"123456789"), "cbf43926");
        assert_eq!(crc_hex::<Crc16>(b"123456789"), "bb3d");
        assert_eq!(crc_hex::<Crc16>(b""), "0000");
        assert_eq!(crc_hex::<Crc32>(b""), "00000000");
    }
}
