//! ShiftPulse - shift-work utilization and efficiency reports
//!
//! Main entry point for the command line application.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use shiftpulse_domain::types::{
    MetricType, ProcessMappingEntry, ReportFilter, ShiftDesignation,
};
use shiftpulse_infra::{config, init_logging, FileRecordSource};
use shiftpulse_lib::adapters::{render_table, ReportView};
use shiftpulse_lib::{
    add_mapping, classify_timestamp, delete_mapping, generate_report, list_mappings,
    resolve_process, AppContext, CatalogPaths, ReportOptions,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "shiftpulse")]
#[command(version, about = "Shift-work utilization and efficiency reports")]
struct Cli {
    /// Configuration file (default: search for shiftpulse.toml / config.toml nearby)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute detail and worker performance from activity records
    Report {
        /// Activity records file (.csv, .json or .toml)
        #[arg(long)]
        records: PathBuf,
        /// Shift calendar file
        #[arg(long)]
        calendar: Option<PathBuf>,
        /// Process mapping file
        #[arg(long)]
        mapping: Option<PathBuf>,
        /// Metric driving bands, outliers and sort order
        #[arg(long)]
        metric: Option<MetricType>,
        /// Efficiency outlier threshold in percent
        #[arg(long)]
        threshold: Option<f64>,
        /// Only these workers (repeatable)
        #[arg(long = "worker")]
        workers: Vec<String>,
        /// First working day (inclusive, YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last working day (inclusive, YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Day or night shift
        #[arg(long)]
        shift: Option<ShiftDesignation>,
        /// Crew letter
        #[arg(long)]
        letter: Option<String>,
        /// Process category
        #[arg(long)]
        category: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show how a raw process description resolves
    Resolve {
        description: String,
        /// Process mapping file
        #[arg(long)]
        mapping: Option<PathBuf>,
    },

    /// Show the working day and shift of a timestamp
    Classify {
        /// Timestamp, e.g. "2026-03-10 02:30"
        timestamp: String,
        /// Shift calendar file
        #[arg(long)]
        calendar: Option<PathBuf>,
    },

    /// Edit or list the process mapping table
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
        /// Process mapping file
        #[arg(long, global = true)]
        mapping: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum MappingAction {
    /// Add or replace a mapping row
    Add {
        raw: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        sequence: i64,
    },
    /// Delete a mapping row
    Delete { raw: String },
    /// List mapping rows by sequence
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load .env before reading SHIFTPULSE_* overrides
    let dotenv = dotenvy::dotenv();
    let config = config::load_from_file(cli.config).context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env"),
        Err(e) => debug!("No .env file loaded: {e}"),
    }

    match cli.command {
        Commands::Report {
            records,
            calendar,
            mapping,
            metric,
            threshold,
            workers,
            from,
            to,
            shift,
            letter,
            category,
            format,
        } => {
            let ctx = AppContext::new(config, CatalogPaths { calendar, mapping })
                .context("Failed to load catalogs")?;
            let options = ReportOptions {
                metric,
                outlier_threshold_pct: threshold,
                filter: ReportFilter {
                    workers,
                    from,
                    to,
                    designation: shift,
                    staffing_letter: letter,
                    category,
                },
            };
            let source = FileRecordSource::new(&records);
            let report = generate_report(&ctx, &source, options)
                .with_context(|| format!("Failed to build report from {}", records.display()))?;

            match format {
                OutputFormat::Table => print!("{}", render_table(&report)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&ReportView::from(&report))?);
                }
            }
        }

        Commands::Resolve { description, mapping } => {
            let ctx = AppContext::new(config, CatalogPaths { calendar: None, mapping })
                .context("Failed to load catalogs")?;
            let resolution = resolve_process(&ctx, &description);
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        }

        Commands::Classify { timestamp, calendar } => {
            let ctx = AppContext::new(config, CatalogPaths { calendar, mapping: None })
                .context("Failed to load catalogs")?;
            let lookup = classify_timestamp(&ctx, &timestamp)?;
            let letter = lookup.staffing_letter.as_deref().unwrap_or("(not in calendar)");
            println!(
                "{} -> {} {} shift, crew {letter}",
                lookup.timestamp, lookup.working_day, lookup.designation
            );
        }

        Commands::Mapping { action, mapping } => {
            let ctx = AppContext::new(config, CatalogPaths { calendar: None, mapping })
                .context("Failed to load catalogs")?;
            match action {
                MappingAction::Add { raw, category, name, sequence } => {
                    let entry = ProcessMappingEntry {
                        raw_description: raw,
                        category,
                        process_name: name,
                        sequence,
                    };
                    let version = add_mapping(&ctx, entry)?;
                    println!("Mapping saved (catalog version {version})");
                }
                MappingAction::Delete { raw } => {
                    let removed = delete_mapping(&ctx, &raw)?;
                    println!(
                        "Deleted mapping '{}' -> {}",
                        removed.raw_description, removed.process_name
                    );
                }
                MappingAction::List { json } => {
                    let entries = list_mappings(&ctx);
                    if json {
                        println!("{}", serde_json::to_string_pretty(&entries)?);
                    } else {
                        for entry in entries {
                            println!(
                                "{:>4}  {:<24} {:<14} {}",
                                entry.sequence,
                                entry.raw_description,
                                entry.category,
                                entry.process_name
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
