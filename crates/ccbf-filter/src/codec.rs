//! CCBF v1 binary format
//!
//! Big-endian throughout:
//!
//! | Offset | Size | Field      |
//! |--------|------|------------|
//! | 0      | 4    | `"CCBF"`   |
//! | 4      | 2    | version    |
//! | 6      | 2    | hash count |
//! | 8      | 4    | bit count  |
//! | 12     | ceil(bit count / 8) | bit array |

use byteorder::{BigEndian as BE, ByteOrder};

use crate::domain::BloomFilter;
use crate::error::{FilterError, Result};

/// File signature
pub const MAGIC: &[u8; 4] = b"CCBF";

/// The only version this crate reads or writes
pub const FORMAT_VERSION: u16 = 1;

/// Fixed header size in bytes
pub const HEADER_LEN: usize = 12;

/// Fixed-size CCBF header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub version: u16,
    pub hash_count: u16,
    pub bit_count: u32,
}

impl Header {
    /// Header for the current format version
    pub fn new(hash_count: u16, bit_count: u32) -> Self {
        Self {
            version: FORMAT_VERSION,
            hash_count,
            bit_count,
        }
    }

    /// The 12 header bytes
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[..4].copy_from_slice(MAGIC);
        BE::write_u16(&mut buf[4..6], self.version);
        BE::write_u16(&mut buf[6..8], self.hash_count);
        BE::write_u32(&mut buf[8..12], self.bit_count);
        buf
    }

    /// Parse and check the header at the start of `bytes`
    ///
    /// Magic is checked before length so that any foreign file reports a
    /// format error; the version is checked before the sizing fields.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MAGIC.len() || &bytes[..MAGIC.len()] != MAGIC {
            return Err(FilterError::InvalidFormat);
        }
        if bytes.len() < HEADER_LEN {
            return Err(FilterError::TruncatedHeader { len: bytes.len() });
        }

        let version = BE::read_u16(&bytes[4..6]);
        if version != FORMAT_VERSION {
            return Err(FilterError::UnsupportedVersion { version });
        }
        let hash_count = BE::read_u16(&bytes[6..8]);
        let bit_count = BE::read_u32(&bytes[8..12]);

        Ok(Self {
            version,
            hash_count,
            bit_count,
        })
    }

    /// Total serialized size of a filter with this header
    pub fn file_len(&self) -> usize {
        HEADER_LEN + (self.bit_count as usize).div_ceil(8)
    }
}

/// Serialize a filter: header followed by the raw bit array
pub fn encode(filter: &BloomFilter) -> Vec<u8> {
    let header = filter.header();
    let mut out = Vec::with_capacity(header.file_len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(filter.as_bytes());
    out
}

/// Deserialize a filter, taking every byte after the header as the bit array
pub fn decode(bytes: &[u8]) -> Result<BloomFilter> {
    let header = Header::decode(bytes)?;
    let body = bytes[HEADER_LEN..].to_vec();
    BloomFilter::from_parts(header.bit_count, header.hash_count, body)
}
