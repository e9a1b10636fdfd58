//! Record filtering.
//!
//! Case-insensitive substring match over a record's raw text and its field
//! keys and values. Pure; the result always preserves input order.

use crate::model::{value_to_string, LogRecord};

/// Check whether a record matches an already lowercased query.
pub fn record_matches(record: &LogRecord, query_lower: &str) -> bool {
    if record.raw_text().to_lowercase().contains(query_lower) {
        return true;
    }

    record.fields().iter().any(|(key, value)| {
        key.to_lowercase().contains(query_lower)
            || value_to_string(value).to_lowercase().contains(query_lower)
    })
}

/// Indices of the records matching `query`, in input order.
///
/// An empty query matches everything.
pub fn filter_indices(records: &[LogRecord], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    let query_lower = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, &query_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Records matching `query`, in input order.
pub fn filter<'a>(records: &'a [LogRecord], query: &str) -> Vec<&'a LogRecord> {
    filter_indices(records, query)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}
