//! CRCXX computes CRC-16 and CRC-32 checksums of byte buffers, as integers or as zero padded hex
//! strings
use std::fmt;

pub mod checksum;

pub mod crc;

pub use self::checksum::*;
pub use self::crc::{calc_crc16, calc_crc32, crc, crc_hex, Crc16, Crc32, CrcWidth};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    /// Only 16 and 32 bit CRCs are supported
    InvalidWidth(u32),
    /// The frame is too short to hold a CRC trailer
    Truncated {
        /// Size of the trailer, in bytes
        needed: usize,
        len: usize,
    },
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChecksumError::InvalidWidth(bits) => {
                write!(f, "unsupported CRC width {} (expected 16 or 32)", bits)
            }
            ChecksumError::Truncated { needed, len } => write!(
                f,
                "frame of {} bytes is too short for a {} byte CRC",
                len, needed
            ),
        }
    }
}

impl std::error::Error for ChecksumError {}
