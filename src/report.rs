//! Region diagnostics: how many slots are in use and what was filtered.
//!
//! ## Slot verdicts
//!
//! | Verdict | Meaning |
//! |---------|---------|
//! | `Sentinel` | Exact sentinel image; skipped |
//! | `Decoded` | Decoded into a record (stale or not) |
//! | `Truncated` | Would read past the buffer; skipped |
//!
//! `unpinged_slots` counts slots whose ping is `0xFFFF` regardless of the
//! verdict, so the field-level check can be compared with the byte-level one.
//! `truncated_slots` is always zero for a file that passed size validation.

use std::collections::HashSet;

use crate::cache::ServerCache;
use crate::layout::Region;
use crate::record::ServerRecord;
use crate::slot::{slot_offset, RawSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotVerdict {
    Sentinel,
    Decoded,
    Truncated,
}

/// Complete report produced by [`RegionReport::scan`].
#[derive(Debug, Clone)]
pub struct RegionReport {
    pub region:            Region,
    /// Slots walked (after the favorite-count bound, if honored).
    pub total_slots:       usize,
    pub sentinel_slots:    usize,
    /// Slots with ping `0xFFFF`, sentinel or not.
    pub unpinged_slots:    usize,
    pub decoded_slots:     usize,
    /// Decoded slots dropped as equal to an earlier record.
    pub duplicate_records: usize,
    pub truncated_slots:   usize,
    /// Records in output order (deduplicated when the cache is configured to).
    pub records:           Vec<ServerRecord>,
}

impl RegionReport {
    pub fn scan(cache: &ServerCache, region: Region) -> Self {
        let data = cache.as_bytes();
        let options = cache.options();
        let slots = cache.slots(region);
        let total_slots = slots.slot_count();

        let mut report = Self {
            region,
            total_slots,
            sentinel_slots:    0,
            unpinged_slots:    0,
            decoded_slots:     0,
            duplicate_records: 0,
            truncated_slots:   0,
            records:           Vec::new(),
        };
        let mut seen: HashSet<ServerRecord> = HashSet::new();

        for index in 0..total_slots {
            let slot = RawSlot::new(data, slot_offset(slots.start(), index));
            match verdict(slot.as_ref()) {
                SlotVerdict::Truncated => report.truncated_slots += 1,
                SlotVerdict::Sentinel => report.sentinel_slots += 1,
                SlotVerdict::Decoded => report.decoded_slots += 1,
            }
            let Some(slot) = slot else { continue };
            if !slot.is_pinged() {
                report.unpinged_slots += 1;
            }
            if slot.is_sentinel() {
                continue;
            }
            let record = slot.decode();
            if options.deduplicate && !seen.insert(record.clone()) {
                report.duplicate_records += 1;
                continue;
            }
            report.records.push(record);
        }
        report
    }

    /// Percentage of walked slots holding real data (0.0–100.0).
    pub fn occupancy_pct(&self) -> f64 {
        if self.total_slots == 0 { return 0.0; }
        self.decoded_slots as f64 / self.total_slots as f64 * 100.0
    }

    /// Summary line for display.
    pub fn summary(&self) -> String {
        format!(
            "{} region: {}/{} slots in use ({:.1}%), {} sentinel, {} unpinged, \
             {} duplicate(s), {} truncated, {} record(s)",
            self.region,
            self.decoded_slots,
            self.total_slots,
            self.occupancy_pct(),
            self.sentinel_slots,
            self.unpinged_slots,
            self.duplicate_records,
            self.truncated_slots,
            self.records.len(),
        )
    }
}

pub fn verdict(slot: Option<&RawSlot<'_>>) -> SlotVerdict {
    match slot {
        None => SlotVerdict::Truncated,
        Some(s) if s.is_sentinel() => SlotVerdict::Sentinel,
        Some(_) => SlotVerdict::Decoded,
    }
}
