//! Log scanner for selecting marker lines and extracting hop-count keys.
//!
//! The scanner reads the whole input log into memory, keeps the lines that
//! contain the marker substring, and pulls the last whitespace-delimited
//! field out of each one as the aggregation key.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of scanning an input log.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// One key per matching line, in input order. Duplicates are expected;
    /// the tally step counts them.
    pub keys: Vec<String>,
    /// Total number of lines read from the input, matching or not.
    pub lines_read: usize,
}

/// Scanner over a single plain-text log file.
pub struct LogScanner {
    input: PathBuf,
    marker: String,
}

impl LogScanner {
    /// Create a new scanner for the given input path and marker substring.
    pub fn new(input: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            marker: marker.into(),
        }
    }

    /// Path of the input log this scanner reads.
    pub fn input_path(&self) -> &Path {
        &self.input
    }

    /// Read the input log and extract one key per matching line.
    ///
    /// Matching is substring-based, not token-based: a marker embedded in a
    /// longer token still selects the line. A missing or unreadable input
    /// file is a fatal error.
    pub fn scan(&self) -> Result<ScanOutcome> {
        let content = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read input log: {}", self.input.display()))?;

        let mut keys = Vec::new();
        let mut lines_read = 0;

        for line in content.lines() {
            lines_read += 1;
            if !line.contains(&self.marker) {
                continue;
            }
            // The last field is assumed integer-like; it is not validated
            // here. A whitespace-only line cannot contain the marker, so a
            // matching line always has a last field.
            if let Some(key) = line.split_whitespace().last() {
                keys.push(key.to_string());
            }
        }

        debug!(
            "Scanned {}: {} lines, {} matched marker {:?}",
            self.input.display(),
            lines_read,
            keys.len(),
            self.marker
        );

        Ok(ScanOutcome { keys, lines_read })
    }
}
