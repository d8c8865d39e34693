use crate::layout::{FAVORITE_COUNT_OFFSET, HEADER_SIZE};

/// Read-only view of the 16-byte file header.
///
/// The header is not parsed beyond the favorite count; everything else is
/// passed through for diagnostic dumping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheHeader<'a> {
    bytes: &'a [u8; HEADER_SIZE],
}

impl<'a> CacheHeader<'a> {
    pub fn new(bytes: &'a [u8; HEADER_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of favorites the game claims to hold.
    pub fn favorite_count(&self) -> u8 {
        self.bytes[FAVORITE_COUNT_OFFSET]
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.bytes)
    }
}
