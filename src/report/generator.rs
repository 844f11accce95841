//! Summary report generation.
//!
//! This module renders the sorted tally as the plain-text report written to
//! the output file, echoes it to standard output, and can also serialize
//! the full summary as JSON.

use crate::models::Summary;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Generate the text report payload: one `"<key> <count>"` line per entry,
/// in ascending numeric key order.
///
/// The grand total is deliberately not part of the file payload; it goes to
/// standard output only.
pub fn generate_text_report(summary: &Summary) -> String {
    let mut output = String::new();

    for entry in &summary.entries {
        output.push_str(&format!("{} {}\n", entry.key, entry.count));
    }

    output
}

/// Generate a JSON report of the full summary, including run metadata.
pub fn generate_json_report(summary: &Summary) -> Result<String> {
    serde_json::to_string_pretty(summary).map_err(Into::into)
}

/// Write the text report to a file, creating or truncating it.
pub fn write_report(summary: &Summary, path: &Path) -> Result<()> {
    let content = generate_text_report(summary);

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}

/// Write the JSON report to a file, creating or truncating it.
pub fn write_json_report(summary: &Summary, path: &Path) -> Result<()> {
    let content = generate_json_report(summary)?;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}

/// Print the per-key lines and the grand total to standard output.
///
/// Status and diagnostics go through tracing (stderr), so stdout carries
/// exactly the per-key lines followed by the `total:` line.
pub fn print_summary(summary: &Summary) {
    for entry in &summary.entries {
        println!("{} {}", entry.key, entry.count);
    }
    println!("total: {}", summary.total);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RunMetadata, TallyEntry};
    use chrono::Utc;

    fn make_summary(entries: Vec<TallyEntry>) -> Summary {
        let metadata = RunMetadata {
            input_path: "log.txt".to_string(),
            marker: "key_found".to_string(),
            generated_at: Utc::now(),
            lines_read: 5,
            duration_seconds: 0.01,
        };
        Summary::from_entries(entries, metadata)
    }

    fn entry(hops: i64, count: usize) -> TallyEntry {
        TallyEntry {
            hops,
            key: hops.to_string(),
            count,
        }
    }

    #[test]
    fn test_generate_text_report() {
        let summary = make_summary(vec![entry(1, 2), entry(2, 1)]);
        assert_eq!(generate_text_report(&summary), "1 2\n2 1\n");
    }

    #[test]
    fn test_generate_text_report_empty() {
        let summary = make_summary(Vec::new());
        assert_eq!(generate_text_report(&summary), "");
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn test_write_report_roundtrip() {
        let summary = make_summary(vec![entry(2, 1), entry(10, 3)]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search_performance.log");

        write_report(&summary, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "2 1\n10 3\n");
    }

    #[test]
    fn test_write_report_unwritable_path_is_fatal() {
        let summary = make_summary(Vec::new());
        let result = write_report(&summary, Path::new("/nonexistent/dir/out.log"));
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_json_report() {
        let summary = make_summary(vec![entry(1, 2)]);
        let json = generate_json_report(&summary).unwrap();

        assert!(json.contains("\"entries\""));
        assert!(json.contains("\"total\": 2"));
        assert!(json.contains("\"marker\": \"key_found\""));
    }
}
