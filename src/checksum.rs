use std::fmt;

use byteorder::ByteOrder;
use log::{trace, warn};

use crate::crc::{calc_crc16, calc_crc32};
use crate::ChecksumError;

/// The width of a CRC, in bits
///
/// Only the two conventional variants are supported, so any other width can't be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// CRC-16/ARC
    Crc16,
    /// CRC-32 (ISO 3309)
    Crc32,
}

impl Width {
    pub fn bits(self) -> u32 {
        match self {
            Width::Crc16 => 16,
            Width::Crc32 => 32,
        }
    }

    /// Number of hex digits needed to print a checksum of this width
    pub fn hex_digits(self) -> usize {
        self.bits() as usize / 4
    }

    /// Number of bytes a checksum of this width takes when stored in a frame
    pub fn trailer_len(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u32> for Width {
    type Error = ChecksumError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            16 => Ok(Width::Crc16),
            32 => Ok(Width::Crc32),
            other => Err(ChecksumError::InvalidWidth(other)),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CRC-{}", self.bits())
    }
}

/// How [`compute`] hands back its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Integer,
    /// Lowercase hex, zero padded to `width / 4` characters
    HexString,
}

/// A computed checksum
///
/// The integer type always matches the width it was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Checksum {
    Crc16(u16),
    Crc32(u32),
}

impl Checksum {
    pub fn width(&self) -> Width {
        match self {
            Checksum::Crc16(_) => Width::Crc16,
            Checksum::Crc32(_) => Width::Crc32,
        }
    }

    /// The checksum widened to a u32
    pub fn value(&self) -> u32 {
        match *self {
            Checksum::Crc16(v) => v as u32,
            Checksum::Crc32(v) => v,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("{:x}", self)
    }
}

impl From<u16> for Checksum {
    fn from(v: u16) -> Self {
        Checksum::Crc16(v)
    }
}

impl From<u32> for Checksum {
    fn from(v: u32) -> Self {
        Checksum::Crc32(v)
    }
}

// Both impls pad to the full width of the checksum, so a CRC-32 of 0xabcd prints as "0000abcd"
impl fmt::LowerHex for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:0width$x}",
            self.value(),
            width = self.width().hex_digits()
        )
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

/// The output of [`compute`], in the format that was asked for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChecksumResult {
    Integer(Checksum),
    HexString(String),
}

impl ChecksumResult {
    pub fn format(&self) -> OutputFormat {
        match self {
            ChecksumResult::Integer(_) => OutputFormat::Integer,
            ChecksumResult::HexString(_) => OutputFormat::HexString,
        }
    }

    /// The integer checksum, if this result was computed with [`OutputFormat::Integer`]
    pub fn checksum(&self) -> Option<Checksum> {
        match self {
            ChecksumResult::Integer(c) => Some(*c),
            ChecksumResult::HexString(_) => None,
        }
    }

    pub fn into_hex(self) -> String {
        match self {
            ChecksumResult::Integer(c) => c.to_hex(),
            ChecksumResult::HexString(s) => s,
        }
    }
}

impl fmt::Display for ChecksumResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChecksumResult::Integer(c) => write!(f, "{}", c),
            ChecksumResult::HexString(s) => f.write_str(s),
        }
    }
}

/// Calculates the checksum of `buffer` with the given width
pub fn checksum(buffer: &[u8], width: Width) -> Checksum {
    trace!("computing {} over {} bytes", width, buffer.len());
    match width {
        Width::Crc16 => Checksum::Crc16(calc_crc16(buffer)),
        Width::Crc32 => Checksum::Crc32(calc_crc32(buffer)),
    }
}

/// Calculates the checksum of `buffer`, returned either as an integer or as a hex string
///
/// ```
/// use crcxx::{compute, OutputFormat, Width};
///
/// let hex = compute(b"123456789", Width::Crc32, OutputFormat::HexString);
/// assert_eq!(hex.to_string(), "cbf43926");
/// ```
pub fn compute(buffer: &[u8], width: Width, format: OutputFormat) -> ChecksumResult {
    let crc = checksum(buffer, width);
    match format {
        OutputFormat::Integer => ChecksumResult::Integer(crc),
        OutputFormat::HexString => ChecksumResult::HexString(crc.to_hex()),
    }
}

/// Same as [`compute`], over the UTF-8 bytes of `text`
pub fn compute_str(text: &str, width: Width, format: OutputFormat) -> ChecksumResult {
    compute(text.as_bytes(), width, format)
}

/// Checks that `buffer` has the `expected` checksum
///
/// The width is taken from `expected`.
pub fn verify(buffer: &[u8], expected: Checksum) -> bool {
    let computed = checksum(buffer, expected.width());
    if computed != expected {
        warn!(
            "Computed {} {:x} does not match expected {:x}",
            expected.width(),
            computed,
            expected
        );
    }
    computed == expected
}

/// Checks a frame whose last `width / 8` bytes hold the CRC of everything before them
///
/// The stored CRC is decoded with the byte order `B`.
pub fn verify_trailer<B: ByteOrder>(frame: &[u8], width: Width) -> Result<bool, ChecksumError> {
    let needed = width.trailer_len();
    if frame.len() < needed {
        return Err(ChecksumError::Truncated {
            needed,
            len: frame.len(),
        });
    }

    let (payload, trailer) = frame.split_at(frame.len() - needed);
    let received = match width {
        Width::Crc16 => Checksum::Crc16(B::read_u16(trailer)),
        Width::Crc32 => Checksum::Crc32(B::read_u32(trailer)),
    };

    Ok(verify(payload, received))
}
