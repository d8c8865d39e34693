//! Fixed-size slot views over the cache buffer.
//!
//! A [`RawSlot`] borrows exactly [`SLOT_SIZE`] bytes from the loaded file and
//! knows where it came from. Decoding copies every field out into an owned
//! [`ServerRecord`], so records outlive the buffer they were read from.
//!
//! ## Sentinel slots
//!
//! The game pre-allocates slots and writes a fixed bit pattern into the ones
//! it never managed to ping: the queried flag (byte 0x1B) set, the ping
//! (bytes 0x2A..0x2C) at `0xFFFF`, every other byte zero. Only an exact match
//! against [`SENTINEL_SLOT`] marks a slot as empty; a single stray byte means
//! the slot carries real, possibly stale, data.

pub mod builder;

use byteorder::{ByteOrder, LittleEndian};
use std::net::Ipv4Addr;
use tracing::warn;

use crate::layout::*;
use crate::record::ServerRecord;

pub use builder::SlotBuilder;

/// Exact byte image of an allocated-but-never-pinged slot.
pub const SENTINEL_SLOT: [u8; SLOT_SIZE] = sentinel_pattern();

const fn sentinel_pattern() -> [u8; SLOT_SIZE] {
    let mut pattern = [0u8; SLOT_SIZE];
    pattern[QUERIED_FLAG_OFFSET] = 0x01;
    pattern[PING_OFFSET] = 0xFF;
    pattern[PING_OFFSET + 1] = 0xFF;
    pattern
}

// ── RawSlot ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSlot<'a> {
    offset: usize,
    bytes:  &'a [u8; SLOT_SIZE],
}

impl<'a> RawSlot<'a> {
    /// Borrow the slot starting at `offset`, or `None` if it would run past
    /// the end of `data`.
    pub fn new(data: &'a [u8], offset: usize) -> Option<Self> {
        let end = offset.checked_add(SLOT_SIZE)?;
        let bytes: &[u8; SLOT_SIZE] = data.get(offset..end)?.try_into().ok()?;
        Some(Self { offset, bytes })
    }

    /// Absolute offset of the first slot byte in the file.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn as_bytes(&self) -> &'a [u8; SLOT_SIZE] {
        self.bytes
    }

    pub fn is_sentinel(&self) -> bool {
        *self.bytes == SENTINEL_SLOT
    }

    pub fn ping(&self) -> u16 {
        LittleEndian::read_u16(&self.bytes[PING_OFFSET..PING_OFFSET + 2])
    }

    /// Field-level shortcut for the sentinel rule. Agrees with
    /// [`is_sentinel`](Self::is_sentinel) on files the game wrote itself.
    pub fn is_pinged(&self) -> bool {
        self.ping() != PING_NEVER
    }

    pub fn decode(&self) -> ServerRecord {
        let b = self.bytes;
        ServerRecord {
            name:           read_latin1(&b[NAME_OFFSET..NAME_OFFSET + NAME_LEN]),
            ip:             Ipv4Addr::new(
                b[IP_OFFSET],
                b[IP_OFFSET + 1],
                b[IP_OFFSET + 2],
                b[IP_OFFSET + 3],
            ),
            port:           LittleEndian::read_u16(&b[PORT_OFFSET..PORT_OFFSET + 2]),
            map:            read_latin1(&b[MAP_OFFSET..MAP_OFFSET + MAP_LEN]),
            mod_name:       read_latin1(&b[MOD_OFFSET..MOD_OFFSET + MOD_LEN]),
            game_mode:      read_latin1(&b[GAME_MODE_OFFSET..GAME_MODE_OFFSET + GAME_MODE_LEN]),
            players_online: b[PLAYERS_ONLINE_OFFSET],
            max_players:    b[MAX_PLAYERS_OFFSET],
        }
    }
}

/// Read a NUL-terminated string, mapping each byte to the code point of the
/// same value. Never fails.
pub fn read_latin1(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0x00)
        .map(|&b| char::from(b))
        .collect()
}

// ── Slots ─────────────────────────────────────────────────────────────────────

/// Lazy walk over `count` consecutive slots starting at `start`.
///
/// Slots that would extend past the buffer are skipped. For a buffer that
/// passed size validation that never happens.
#[derive(Debug, Clone)]
pub struct Slots<'a> {
    data:  &'a [u8],
    start: usize,
    count: usize,
    next:  usize,
}

impl<'a> Slots<'a> {
    pub fn new(data: &'a [u8], start: usize, count: usize) -> Self {
        Self { data, start, count, next: 0 }
    }

    pub fn region(data: &'a [u8], region: Region) -> Self {
        Self::new(data, region.offset(), region.slot_count())
    }

    /// Absolute offset of the first slot of the walk.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of slot positions the walk covers, truncated ones included.
    pub fn slot_count(&self) -> usize {
        self.count
    }

    /// Same walk, but stop after at most `limit` slots.
    pub fn take_slots(mut self, limit: usize) -> Self {
        self.count = self.count.min(limit);
        self
    }
}

/// Absolute offset of slot `index` in a region starting at `start`.
pub fn slot_offset(start: usize, index: usize) -> usize {
    start + index * SLOT_SIZE
}

impl<'a> Iterator for Slots<'a> {
    type Item = RawSlot<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.count {
            let offset = slot_offset(self.start, self.next);
            self.next += 1;
            match RawSlot::new(self.data, offset) {
                Some(slot) => return Some(slot),
                None => warn!(
                    offset,
                    len = self.data.len(),
                    "slot extends past end of buffer, skipping"
                ),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.count.saturating_sub(self.next)))
    }
}
