//! Fetch command implementation
//!
//! The full download-and-extract pipeline: locate the latest workbook on
//! the bulletin page, download it, read the first worksheet, extract price
//! records, and write the dated JSON report. Network operations race
//! against the cancellation token so Ctrl+C interrupts cleanly.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::shared::{
    PipelineStats, create_spinner, load_configuration, print_summary, setup_logging,
};
use crate::app::services::bulletin_fetcher::BulletinFetcher;
use crate::app::services::country_registry::CountryRegistry;
use crate::app::services::extractor::PriceExtractor;
use crate::app::services::{report_writer, workbook};
use crate::cli::args::FetchArgs;
use crate::{Error, Result};

/// Fetch command runner
///
/// Orchestrates the pipeline end to end:
/// 1. Set up logging and configuration
/// 2. Locate and download the latest workbook
/// 3. Extract the bulletin date and price records
/// 4. Write the dated JSON report and print a summary
pub async fn run_fetch(
    args: FetchArgs,
    cancellation_token: CancellationToken,
) -> Result<PipelineStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting bulletin fetch");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(
        args.config_file.as_deref(),
        args.page_url.as_deref(),
        args.output_dir.as_deref(),
    )?;

    let fetcher = BulletinFetcher::new(&config.fetch)?;
    let mut stats = PipelineStats::default();

    // Locate the workbook, unless a direct URL was given
    let spinner = if args.show_progress() {
        Some(create_spinner("Locating latest workbook..."))
    } else {
        None
    };

    let workbook_url = match &args.workbook_url {
        Some(url) => {
            info!("Using workbook URL from arguments: {}", url);
            url.clone()
        }
        None => tokio::select! {
            _ = cancellation_token.cancelled() => {
                return Err(Error::processing_interrupted("Workbook discovery cancelled"));
            }
            url = fetcher.latest_workbook_url() => url?,
        },
    };
    stats.workbook_url = Some(workbook_url.clone());

    // Download destination: the keep path, or a temporary file removed on drop
    let mut temp_guard: Option<NamedTempFile> = None;
    let workbook_path: PathBuf = match &args.keep_workbook {
        Some(path) => path.clone(),
        None => {
            let file = tempfile::Builder::new()
                .prefix("oil-bulletin-")
                .suffix(".xlsx")
                .tempfile()
                .map_err(|e| Error::io("Failed to create temporary workbook file", e))?;
            let path = file.path().to_path_buf();
            temp_guard = Some(file);
            path
        }
    };

    if let Some(pb) = &spinner {
        pb.set_message("Downloading workbook...");
    }

    stats.workbook_bytes = tokio::select! {
        _ = cancellation_token.cancelled() => {
            return Err(Error::processing_interrupted("Workbook download cancelled"));
        }
        bytes = fetcher.download(&workbook_url, &workbook_path) => bytes?,
    };

    if let Some(pb) = &spinner {
        pb.finish_with_message(format!("Downloaded {} bytes", stats.workbook_bytes));
    }

    // Read the worksheet and determine the report date
    let doc = workbook::load_first_sheet(&workbook_path)?;

    let date = match args.date_override()? {
        Some(date) => {
            info!("Using report date from arguments: {}", date);
            date
        }
        None => workbook::extract_bulletin_date(&doc),
    };
    let date = if args.no_week_align {
        date
    } else {
        date.thursday_of_week()
    };
    info!("Report date: {}", date);

    // Extract and write
    let extractor = PriceExtractor::new(Arc::new(CountryRegistry::new()));
    let result = extractor.extract(&doc);
    stats.record_extraction(&result);

    if result.stats.is_empty_result() {
        warn!("No price records extracted; writing an empty report");
    }

    let report = report_writer::write_report(
        &config.output.output_dir,
        &date,
        &result.records,
        config.output.pretty_json,
    )?;
    stats.record_report(&report);

    if let Some(path) = &args.keep_workbook {
        info!("Workbook kept at {}", path.display());
    }
    drop(temp_guard);

    stats.processing_time = start_time.elapsed();

    if args.show_progress() {
        print_summary(&date, &stats);
    }

    Ok(stats)
}
