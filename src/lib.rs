pub mod layout;
pub mod error;
pub mod header;
pub mod record;
pub mod slot;
pub mod cache;
pub mod report;
pub mod locate;

pub use error::{CacheError, Result};
pub use layout::Region;
pub use header::CacheHeader;
pub use record::ServerRecord;
pub use slot::{RawSlot, SlotBuilder, Slots};
pub use cache::{DecodeOptions, Records, ServerCache};
pub use report::RegionReport;
