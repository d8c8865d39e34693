use std::collections::HashSet;

use crate::record::ServerRecord;
use crate::slot::Slots;

/// Lazy sequence of decoded records over one region.
///
/// Sentinel slots are skipped. With deduplication on, a record equal to one
/// already yielded is dropped, so output keeps first-occurrence order.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    slots: Slots<'a>,
    seen:  Option<HashSet<ServerRecord>>,
}

impl<'a> Records<'a> {
    pub(crate) fn new(slots: Slots<'a>, deduplicate: bool) -> Self {
        Self {
            slots,
            seen: deduplicate.then(HashSet::new),
        }
    }
}

impl Iterator for Records<'_> {
    type Item = ServerRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if slot.is_sentinel() {
                continue;
            }
            let record = slot.decode();
            if let Some(seen) = &mut self.seen {
                if !seen.insert(record.clone()) {
                    continue;
                }
            }
            return Some(record);
        }
        None
    }
}
