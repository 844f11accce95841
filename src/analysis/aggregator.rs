//! Key tallying and numeric sorting.
//!
//! This module builds the per-key occurrence table from the scanned keys
//! and converts it into rows sorted by the integer value of the key.

use crate::models::{AggregationTable, TallyEntry, TallyError};

/// Count occurrences per key.
///
/// Insertion order is irrelevant; the final ordering is decided by
/// [`sorted_entries`].
pub fn tally_keys<S: AsRef<str>>(keys: &[S]) -> AggregationTable {
    let mut table = AggregationTable::new();

    for key in keys {
        *table.entry(key.as_ref().to_string()).or_default() += 1;
    }

    table
}

/// Collect table entries and sort them by the parsed integer value of the
/// key, ascending.
///
/// Keys are sorted numerically, never lexicographically: `"2"` comes before
/// `"10"`. A key that does not parse as an integer is a fatal error, raised
/// here before any output has been written.
pub fn sorted_entries(table: &AggregationTable) -> Result<Vec<TallyEntry>, TallyError> {
    let mut entries = Vec::with_capacity(table.len());

    for (key, count) in table {
        let hops = key
            .parse::<i64>()
            .map_err(|_| TallyError::InvalidKey { key: key.clone() })?;
        entries.push(TallyEntry {
            hops,
            key: key.clone(),
            count: *count,
        });
    }

    entries.sort_by_key(|e| e.hops);
    Ok(entries)
}
