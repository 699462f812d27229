mod models;
mod service;
mod utils;

use crate::models::config::{ScanConfig, DEFAULT_INDEX_FILE_NAME, DEFAULT_OUTPUT_FILE_NAME};
use crate::models::error::ScanError;
use crate::service::scanner::scan_directory;
use crate::service::writer::{save_results_to_csv, sort_by_barcode};
use crate::utils::progress::create_spinner;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, warn};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(&args.log_level);

    let result = run(&args);
    match &result {
        Ok(count) => println!("Successfully processed {} indexfiles", count),
        Err(e) => error!("{:#}", e),
    }
    ExitCode::from(exit_status(&result))
}

/// 0 when the CSV was produced, 1 for every fatal error
fn exit_status(result: &Result<usize>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

#[derive(Parser, Debug)]
#[command(name = "plate_signatures")]
#[command(
    about = "Extract plate barcodes and measurement signatures from indexfiles",
    long_about = None
)]
struct Cli {
    /// Directory containing one export folder per plate
    #[arg(short = 'i', long = "input-dir")]
    input_dir: String,

    /// Name of the metadata file inside each plate folder
    #[arg(long = "index-file", default_value = DEFAULT_INDEX_FILE_NAME)]
    index_file: String,

    /// Name of the CSV written into the input directory
    #[arg(short = 'o', long = "output-name", default_value = DEFAULT_OUTPUT_FILE_NAME)]
    output_name: String,

    #[arg(short = 'l', long = "log-level", default_value = "info")]
    log_level: String,

    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Scan and report without writing the CSV
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,
}

fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .init();
}

/// Scans the input directory and writes the summary CSV. Returns the number
/// of plates written.
fn run(args: &Cli) -> Result<usize> {
    let config = ScanConfig::from_cli_parts(
        &args.input_dir,
        &args.index_file,
        &args.output_name,
        args.dry_run,
    );
    debug!("Loaded config: {:?}", &config);

    config.validate()?;

    let spinner = if args.quiet {
        None
    } else {
        Some(create_spinner("Scanning plate folders..."))
    };

    let report = scan_directory(&config.input_dir, &config.index_file_name, spinner.as_ref())
        .context("Failed to scan input directory")?;

    if let Some(pb) = spinner {
        pb.finish_with_message(format!(
            "Found {} plates, skipped {} folders",
            report.results.len(),
            report.skipped.len()
        ));
    }

    if !report.skipped.is_empty() {
        warn!("Skipped {} folders", report.skipped.len());
        for skipped in &report.skipped {
            debug!("  {}: {}", skipped.folder, skipped.reason);
        }
    }

    if report.is_empty() {
        return Err(ScanError::NoResults.into());
    }

    if config.dry_run {
        for record in sort_by_barcode(&report.results)? {
            info!("{},{}", record.barcode, record.signature);
        }
        info!(
            "DRY RUN completed - {} was not written",
            config.output_path.display()
        );
    } else {
        save_results_to_csv(&report.results, &config.output_path)
            .context("Failed to save results")?;
    }

    Ok(report.results.len())
}
