//! Data models for the log aggregator.
//!
//! This module contains the core data structures used throughout
//! the application for representing tallied hop counts and run summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Occurrence counts keyed by the raw hop-count token.
///
/// Built once per run, fully in memory, and discarded at process exit.
/// Keys are kept as strings until the sort step; only then are they
/// required to parse as integers.
pub type AggregationTable = HashMap<String, usize>;

/// Errors produced while turning an [`AggregationTable`] into sorted output.
#[derive(Debug, Error)]
pub enum TallyError {
    /// A key extracted from a matching line does not parse as an integer.
    /// This aborts the run before any output is written.
    #[error("aggregation key is not an integer: {key:?}")]
    InvalidKey { key: String },
}

/// One sorted row of the summary: a hop count and how many matching
/// lines carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    /// Parsed integer value of the key, used for ordering.
    pub hops: i64,
    /// The key exactly as it appeared in the log (preserves e.g. leading zeros).
    pub key: String,
    /// Number of matching lines with this key.
    pub count: usize,
}

impl fmt::Display for TallyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.count)
    }
}

/// Metadata about a single aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Path of the input log that was scanned.
    pub input_path: String,
    /// Marker substring used to select lines.
    pub marker: String,
    /// Date and time the summary was generated.
    pub generated_at: DateTime<Utc>,
    /// Total number of lines read from the input.
    pub lines_read: usize,
    /// Duration of the run in seconds.
    pub duration_seconds: f64,
}

/// The complete result of an aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Metadata about the run.
    pub metadata: RunMetadata,
    /// Tally rows in ascending numeric key order.
    pub entries: Vec<TallyEntry>,
    /// Grand total: the number of matching input lines.
    pub total: usize,
}

impl Summary {
    /// Creates a summary from sorted entries. The total is the sum of all
    /// per-key counts, which equals the number of matching input lines.
    pub fn from_entries(entries: Vec<TallyEntry>, metadata: RunMetadata) -> Self {
        let total = entries.iter().map(|e| e.count).sum();
        Self {
            metadata,
            entries,
            total,
        }
    }

    /// Number of distinct keys in the summary.
    pub fn distinct_keys(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_metadata() -> RunMetadata {
        RunMetadata {
            input_path: "log.txt".to_string(),
            marker: "key_found".to_string(),
            generated_at: Utc::now(),
            lines_read: 10,
            duration_seconds: 0.1,
        }
    }

    #[test]
    fn test_entry_display() {
        let entry = TallyEntry {
            hops: 3,
            key: "3".to_string(),
            count: 7,
        };
        assert_eq!(entry.to_string(), "3 7");
    }

    #[test]
    fn test_entry_display_preserves_raw_key() {
        let entry = TallyEntry {
            hops: 7,
            key: "07".to_string(),
            count: 1,
        };
        assert_eq!(entry.to_string(), "07 1");
    }

    #[test]
    fn test_summary_total_is_sum_of_counts() {
        let entries = vec![
            TallyEntry {
                hops: 1,
                key: "1".to_string(),
                count: 2,
            },
            TallyEntry {
                hops: 2,
                key: "2".to_string(),
                count: 1,
            },
        ];
        let summary = Summary::from_entries(entries, make_metadata());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.distinct_keys(), 2);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_entries(Vec::new(), make_metadata());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.distinct_keys(), 0);
    }

    #[test]
    fn test_invalid_key_error_message() {
        let err = TallyError::InvalidKey {
            key: "banana".to_string(),
        };
        assert!(err.to_string().contains("banana"));
    }
}
