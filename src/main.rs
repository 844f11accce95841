//! Hopstats - search-performance log aggregator
//!
//! A CLI tool that tallies marker hits per hop count from a search log,
//! writes a sorted summary to a report file and standard output, and
//! invokes gnuplot on the result.
//!
//! Exit codes:
//!   0 - Success (a failed plot invocation still counts as success)
//!   1 - Runtime error (missing input, non-integer key, unwritable output)

mod analysis;
mod cli;
mod config;
mod models;
mod plot;
mod report;
mod scanner;

use anyhow::{Context, Result};
use chrono::Utc;
use cli::{Args, OutputFormat};
use config::Config;
use models::{RunMetadata, Summary};
use plot::PlotOptions;
use scanner::{LogScanner, ScanOutcome};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("Hopstats v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the aggregation
    match run_aggregation(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Aggregation failed: {:#}", e);
            eprintln!("\n❌ Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .hopstats.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(".hopstats.toml");

    if path.exists() {
        eprintln!("⚠️  .hopstats.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .hopstats.toml")?;

    println!("✅ Created .hopstats.toml with default settings.");
    println!("   Edit it to customize input, marker, output, and the plotter.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so that stdout carries exactly the per-key lines and
/// the total.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete aggregation pipeline. Returns the exit code.
fn run_aggregation(args: Args) -> Result<i32> {
    let start_time = Instant::now();

    // Load configuration, then let CLI arguments override it
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    // Step 1: Scan the input log
    let scanner = LogScanner::new(&config.input.path, &config.input.marker);
    info!(
        "Scanning {} for marker {:?}",
        scanner.input_path().display(),
        config.input.marker
    );
    let outcome = scanner.scan()?;
    info!(
        "{} lines read, {} matched",
        outcome.lines_read,
        outcome.keys.len()
    );

    // Handle --dry-run: report counts and exit without writing
    if args.dry_run {
        return handle_dry_run(&config, &outcome);
    }

    // Step 2: Tally and sort; a non-integer key aborts here, before any
    // output is written
    let table = analysis::tally_keys(&outcome.keys);
    let entries = analysis::sorted_entries(&table)?;

    let metadata = RunMetadata {
        input_path: config.input.path.clone(),
        marker: config.input.marker.clone(),
        generated_at: Utc::now(),
        lines_read: outcome.lines_read,
        duration_seconds: start_time.elapsed().as_secs_f64(),
    };
    let summary = Summary::from_entries(entries, metadata);

    // Step 3: Write the summary file
    let output_path = Path::new(&config.report.output);
    match args.format {
        OutputFormat::Text => report::write_report(&summary, output_path)?,
        OutputFormat::Json => report::write_json_report(&summary, output_path)?,
    }
    info!("Summary saved to: {}", output_path.display());

    // Step 4: Echo the summary and the grand total to stdout
    report::print_summary(&summary);

    // Step 5: Hand off to the plotter; failure is logged and ignored
    if config.plot.enabled {
        let options = PlotOptions {
            command: config.plot.command.clone(),
            script: Some(config.plot.script.clone()),
        };
        plot::invoke_plotter(&options);
    } else {
        debug!("Plotter disabled, skipping");
    }

    info!(
        "Done: {} distinct hop counts, {} matching lines in {:.3}s",
        summary.distinct_keys(),
        summary.total,
        start_time.elapsed().as_secs_f64()
    );

    Ok(0)
}

/// Handle --dry-run: print what a real run would aggregate, write nothing.
fn handle_dry_run(config: &Config, outcome: &ScanOutcome) -> Result<i32> {
    let table = analysis::tally_keys(&outcome.keys);

    println!("🔍 Dry run: no files written, no plotter invoked.");
    println!("   Input: {}", config.input.path);
    println!("   Marker: {}", config.input.marker);
    println!("   Lines read: {}", outcome.lines_read);
    println!("   Matching lines: {}", outcome.keys.len());
    println!("   Distinct keys: {}", table.len());

    Ok(0)
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .hopstats.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {:#}", e);
            Ok(Config::default())
        }
    }
}
