//! Fixed byte layout of `servercache.dat`.
//!
//! Every offset in this module is absolute and assumes a file of exactly
//! [`FILE_SIZE`] bytes. There is no version field to negotiate: a file of any
//! other length is rejected before a single slot is read.

// ── File ──────────────────────────────────────────────────────────────────────

/// Exact length of a valid cache file.
pub const FILE_SIZE: usize = 0x2F_E990;
/// Opaque header in front of the general region.
pub const HEADER_SIZE: usize = 0x10;
/// Header byte holding the number of valid favorite entries.
pub const FAVORITE_COUNT_OFFSET: usize = 0x08;

// ── Regions ───────────────────────────────────────────────────────────────────

pub const SLOT_SIZE: usize = 0x9C;
pub const GENERAL_OFFSET: usize = 0x10;
pub const FAVORITES_OFFSET: usize = 0x2F_9B90;
pub const GENERAL_SLOT_COUNT: usize = (FAVORITES_OFFSET - GENERAL_OFFSET) / SLOT_SIZE;
pub const FAVORITES_SLOT_COUNT: usize = (FILE_SIZE - FAVORITES_OFFSET) / SLOT_SIZE;

// ── Slot fields (relative to slot start) ──────────────────────────────────────

pub const IP_OFFSET: usize = 0x04;
pub const PORT_OFFSET: usize = 0x08;
pub const PLAYERS_ONLINE_OFFSET: usize = 0x19;
pub const MAX_PLAYERS_OFFSET: usize = 0x1A;
/// Set once the game has queried the slot at least once.
pub const QUERIED_FLAG_OFFSET: usize = 0x1B;
/// Little-endian `u16`; [`PING_NEVER`] means the server never answered.
pub const PING_OFFSET: usize = 0x2A;
pub const PING_NEVER: u16 = 0xFFFF;

pub const NAME_OFFSET: usize = 0x31;
pub const NAME_LEN: usize = 0x20;
pub const MAP_OFFSET: usize = 0x51;
pub const MAP_LEN: usize = 0x20;
pub const MOD_OFFSET: usize = 0x71;
pub const MOD_LEN: usize = 0x18;
pub const GAME_MODE_OFFSET: usize = 0x89;
pub const GAME_MODE_LEN: usize = 0x13;

/// One of the two disjoint slot ranges of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    General,
    Favorites,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::General, Region::Favorites];

    pub fn offset(self) -> usize {
        match self {
            Region::General => GENERAL_OFFSET,
            Region::Favorites => FAVORITES_OFFSET,
        }
    }

    pub fn slot_count(self) -> usize {
        match self {
            Region::General => GENERAL_SLOT_COUNT,
            Region::Favorites => FAVORITES_SLOT_COUNT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::General => "general",
            Region::Favorites => "favorites",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
