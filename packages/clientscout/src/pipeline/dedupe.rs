//! Merging freshly parsed batches into the accumulated result set.

use std::collections::HashSet;

use tracing::debug;

use crate::types::{BusinessRecord, ResultSet};

/// Merge a batch of parsed records into an existing result set.
///
/// Existing records keep their exact order; incoming records are appended
/// in batch order, first occurrence wins. A record is a duplicate when its
/// identity signature matches one already admitted — including one
/// admitted earlier in the same batch, so a reply that repeats itself
/// still collapses. The input set is untouched; callers swap in the
/// returned value when ready. Deterministic, no failure mode: an empty
/// batch yields a value-equal copy of `existing`.
pub fn merge(existing: &ResultSet, incoming: Vec<BusinessRecord>) -> ResultSet {
    let mut seen: HashSet<String> = existing.iter().map(|r| r.signature()).collect();
    let mut records: Vec<BusinessRecord> = existing.records().to_vec();

    let batch_size = incoming.len();
    for record in incoming {
        if seen.insert(record.signature()) {
            records.push(record);
        }
    }

    debug!(
        existing = existing.len(),
        incoming = batch_size,
        admitted = records.len() - existing.len(),
        "Merged extraction batch"
    );

    ResultSet::from_unique(records)
}
