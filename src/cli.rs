//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values. Running with no flags
//! reproduces the classic fixed-name behavior: read `log.txt`, write
//! `search_performance.log`, run gnuplot.
//!
//! Examples:
//!   hopstats
//!   hopstats --input runs/search.log --output runs/summary.log
//!   hopstats --marker key_found --no-plot
//!   hopstats --format json --output summary.json
//!   hopstats --init-config

use clap::Parser;
use std::path::PathBuf;

/// Hopstats - search-performance log aggregator
///
/// Tallies marker hits per hop count from a search log, writes a sorted
/// summary, and hands off to gnuplot.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Input log file to scan
    ///
    /// Defaults to log.txt in the working directory.
    #[arg(short, long, value_name = "FILE", env = "HOPSTATS_INPUT")]
    pub input: Option<PathBuf>,

    /// Output file path for the summary
    ///
    /// Defaults to search_performance.log in the working directory.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Marker substring that selects log lines
    ///
    /// Matching is substring-based: the marker may appear inside a longer
    /// token. Defaults to key_found.
    #[arg(short, long, value_name = "TEXT", env = "HOPSTATS_MARKER")]
    pub marker: Option<String>,

    /// Plot command to invoke after writing the summary
    #[arg(long, value_name = "CMD")]
    pub plot_command: Option<String>,

    /// Script file passed to the plot command
    #[arg(long, value_name = "FILE")]
    pub plot_script: Option<String>,

    /// Skip the plotter invocation entirely
    #[arg(long)]
    pub no_plot: bool,

    /// Output format for the summary file (text, json)
    ///
    /// Standard output always carries the plain per-key lines plus the
    /// total, regardless of this setting.
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Path to configuration file
    ///
    /// If not specified, looks for .hopstats.toml in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dry run: scan and count matches without writing or plotting
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .hopstats.toml configuration file
    #[arg(long)]
    pub init_config: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format for the summary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one "<key> <count>" line per key (default)
    #[default]
    Text,
    /// JSON with run metadata
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref marker) = self.marker {
            if marker.is_empty() {
                return Err("Marker must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
