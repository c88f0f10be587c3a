//! Power-Quality Dashboard CLI
//!
//! This is the command-line front end for the pq-events library. It adds:
//! - Multi-file loading of event/substation exports
//! - Filtered reports driven by a config.toml
//! - Report rendering (TXT/JSON)

use anyhow::{Context, Result};
use clap::Parser;
use pq_events::{PqEvent, Substation, Timestamp};
use std::path::{Path, PathBuf};

mod config;
mod report;

use report::ReportFormat;

/// PQ Dashboard - Aggregate and report power-quality events
#[derive(Parser, Debug)]
#[command(name = "pq-cli")]
#[command(about = "Aggregate power-quality event exports into dashboard reports", long_about = None)]
#[command(version)]
struct Args {
    /// Path to event export file(s) (can be repeated)
    #[arg(short, long, value_name = "FILE")]
    events: Vec<PathBuf>,

    /// Path to substation export file(s) (can be repeated)
    #[arg(short, long, value_name = "FILE")]
    substations: Vec<PathBuf>,

    /// Reference instant for the time windows (RFC 3339; default: now)
    #[arg(long, value_name = "TIMESTAMP")]
    now: Option<String>,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Txt)]
    format: ReportFormat,

    /// Path to configuration file (config.toml) - for filtered reports
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("PQ Dashboard CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using event library v{}", pq_events::VERSION);

    // Check if simple report mode or config mode
    if !args.events.is_empty() || !args.substations.is_empty() {
        // Simple mode - load exports and print the dashboard summary
        simple_report_mode(&args)?;
    } else if let Some(config_path) = &args.config {
        // Config mode - filtered reports from config.toml
        config_report_mode(config_path, &args)?;
    } else {
        // No arguments - show help
        println!("PQ Dashboard - No input specified");
        println!("\nQuick Start:");
        println!("  pq-cli --events events.json");
        println!("  pq-cli --events events.json --substations substations.json");
        println!("\nFor filtered reports:");
        println!("  pq-cli --config config.toml");
        println!("\nUse --help for more options");
    }

    Ok(())
}

/// Simple report mode - load exports, summarize, render
fn simple_report_mode(args: &Args) -> Result<()> {
    let now = resolve_now(&args.now)?;
    let (events, skipped) = load_event_files(&args.events)?;
    let substations = load_substation_files(&args.substations)?;

    let summary = pq_events::summarize(&events, now);
    let context = report::ReportContext {
        now,
        events_loaded: events.len(),
        events_skipped: skipped,
        substation_count: substations.len(),
    };

    let rendered = report::render(&summary, &context, args.format)?;
    write_report(&rendered, args.output.as_deref())
}

/// Config mode - filtered reports driven by config.toml
fn config_report_mode(config_path: &Path, args: &Args) -> Result<()> {
    log::info!("Loading configuration from: {:?}", config_path);
    let app_config = config::load_config(config_path)?;
    log::debug!("Configuration loaded successfully");

    let now = resolve_now(&args.now)?;
    let (events, skipped) = load_event_files(&app_config.input.event_files)?;
    let substations = load_substation_files(&app_config.input.substation_files)?;

    let aggregate_config = app_config.aggregate_config();
    let summary = pq_events::summarize_with_config(&events, now, &aggregate_config);
    let context = report::ReportContext {
        now,
        events_loaded: events.len(),
        events_skipped: skipped,
        substation_count: substations.len(),
    };

    let rendered = report::render(&summary, &context, app_config.output.format)?;

    // Command-line --output wins over the configured path
    let output = args
        .output
        .clone()
        .or_else(|| app_config.output.output_file.clone());
    write_report(&rendered, output.as_deref())
}

/// Resolve the reference instant from --now, falling back to the wall clock
fn resolve_now(arg: &Option<String>) -> Result<Timestamp> {
    match arg {
        Some(raw) => {
            let parsed = chrono::DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid --now timestamp: {}", raw))?;
            Ok(parsed.with_timezone(&chrono::Utc))
        }
        None => Ok(chrono::Utc::now()),
    }
}

/// Load and merge all event export files
fn load_event_files(paths: &[PathBuf]) -> Result<(Vec<PqEvent>, usize)> {
    use rayon::prelude::*;

    let loads = paths
        .par_iter()
        .map(|path| {
            pq_events::load_events(path)
                .with_context(|| format!("Failed to load event file: {:?}", path))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut events = Vec::new();
    let mut skipped = 0;
    for load in loads {
        events.extend(load.events);
        skipped += load.skipped;
    }

    log::info!("Loaded {} events total ({} skipped)", events.len(), skipped);
    Ok((events, skipped))
}

/// Load and merge all substation export files
fn load_substation_files(paths: &[PathBuf]) -> Result<Vec<Substation>> {
    let mut substations = Vec::new();
    for path in paths {
        let loaded = pq_events::load_substations(path)
            .with_context(|| format!("Failed to load substation file: {:?}", path))?;
        substations.extend(loaded);
    }
    Ok(substations)
}

/// Write the rendered report to a file or stdout
fn write_report(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report: {:?}", path))?;
            println!("Report written to {:?}", path);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
