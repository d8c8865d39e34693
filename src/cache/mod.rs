//! High-level [`ServerCache`] API, the primary embedding surface.
//!
//! ```no_run
//! use servercache::ServerCache;
//!
//! let cache = ServerCache::open("servercache.dat")?;
//! for server in cache.servers() {
//!     println!("{server}");
//! }
//! for server in cache.favorite_servers() {
//!     println!("favorite: {}", server.address());
//! }
//! # Ok::<(), servercache::CacheError>(())
//! ```

mod records;

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CacheError, Result};
use crate::header::CacheHeader;
use crate::layout::{Region, FILE_SIZE, HEADER_SIZE};
use crate::report::RegionReport;
use crate::slot::Slots;

pub use records::Records;

// ── DecodeOptions ─────────────────────────────────────────────────────────────

/// Configuration for [`ServerCache::open_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Bound the favorites region by the count stored in header byte 0x08
    /// as well as by its size. Sentinel filtering applies either way.
    pub honor_favorite_count: bool,
    /// Collapse records whose fields are all equal into the first one seen.
    pub deduplicate:          bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            honor_favorite_count: false,
            deduplicate:          true,
        }
    }
}

// ── ServerCache ───────────────────────────────────────────────────────────────

/// A validated, immutable `servercache.dat` held in memory.
#[derive(Debug, Clone)]
pub struct ServerCache {
    path:    Option<PathBuf>,
    header:  [u8; HEADER_SIZE],
    data:    Vec<u8>,
    options: DecodeOptions,
}

impl ServerCache {
    // ── Constructors ─────────────────────────────────────────────────────────

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with(path, DecodeOptions::default())
    }

    pub fn open_with<P: AsRef<Path>>(path: P, options: DecodeOptions) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CacheError::PathNotFound(path.to_owned()));
        }
        debug!(path = %path.display(), "reading server cache");
        let data = std::fs::read(path)?;
        let mut cache = Self::from_bytes_with(data, options)?;
        cache.path = Some(path.to_owned());
        Ok(cache)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Self::from_bytes_with(data, DecodeOptions::default())
    }

    pub fn from_bytes_with(data: Vec<u8>, options: DecodeOptions) -> Result<Self> {
        if data.len() != FILE_SIZE {
            return Err(CacheError::InvalidSize {
                expected: FILE_SIZE,
                found:    data.len(),
            });
        }
        let mut header = [0u8; HEADER_SIZE];
        header.copy_from_slice(&data[..HEADER_SIZE]);
        Ok(Self { path: None, header, data, options })
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Source path, when the cache was loaded from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn header(&self) -> CacheHeader<'_> {
        CacheHeader::new(&self.header)
    }

    // ── Enumeration ──────────────────────────────────────────────────────────

    /// Every slot of `region` the current options allow, sentinels included.
    pub fn slots(&self, region: Region) -> Slots<'_> {
        let slots = Slots::region(&self.data, region);
        match region {
            Region::Favorites if self.options.honor_favorite_count => {
                slots.take_slots(usize::from(self.header().favorite_count()))
            }
            _ => slots,
        }
    }

    /// Decoded records of `region`, sentinels skipped.
    pub fn records(&self, region: Region) -> Records<'_> {
        debug!(%region, "enumerating records");
        Records::new(self.slots(region), self.options.deduplicate)
    }

    /// Servers from the general region.
    pub fn servers(&self) -> Records<'_> {
        self.records(Region::General)
    }

    /// Servers from the favorites region.
    pub fn favorite_servers(&self) -> Records<'_> {
        self.records(Region::Favorites)
    }

    pub fn report(&self, region: Region) -> RegionReport {
        RegionReport::scan(self, region)
    }
}
