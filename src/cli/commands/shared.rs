//! Shared components for CLI commands
//!
//! Common types and utilities used across the command implementations:
//! pipeline statistics, logging setup, configuration layering, and
//! progress/summary output.

use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::app::models::BulletinDate;
use crate::app::services::extractor::ExtractionResult;
use crate::app::services::report_writer::WrittenReport;
use crate::config::Config;
use crate::Result;

/// Pipeline statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// URL the workbook was downloaded from, when fetched remotely
    pub workbook_url: Option<String>,
    /// Downloaded workbook size in bytes
    pub workbook_bytes: u64,
    /// Number of data rows scanned in the worksheet
    pub rows_scanned: usize,
    /// Number of price records emitted
    pub records_emitted: usize,
    /// Number of EU aggregate rows filtered out
    pub aggregate_rows_filtered: usize,
    /// Whether the keyed fallback extraction path was used
    pub used_fallback: bool,
    /// Path of the written report, when one was written
    pub report_path: Option<PathBuf>,
    /// Written report size in bytes
    pub report_bytes: u64,
    /// Total pipeline time
    pub processing_time: Duration,
}

impl PipelineStats {
    /// Fold extraction statistics into the pipeline totals
    pub fn record_extraction(&mut self, result: &ExtractionResult) {
        self.rows_scanned = result.stats.rows_scanned;
        self.records_emitted = result.stats.records_emitted;
        self.aggregate_rows_filtered = result.stats.aggregate_rows_filtered;
        self.used_fallback = result.stats.used_fallback;
    }

    /// Fold report output details into the pipeline totals
    pub fn record_report(&mut self, report: &WrittenReport) {
        self.report_path = Some(report.path.clone());
        self.report_bytes = report.bytes;
    }
}

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("oil_bulletin={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration and apply CLI argument overrides
pub fn load_configuration(
    config_file: Option<&Path>,
    page_url: Option<&str>,
    output_dir: Option<&Path>,
) -> Result<Config> {
    info!("Loading configuration");
    let mut config = Config::load(config_file)?;

    // Override settings explicitly provided on the command line
    if let Some(url) = page_url {
        config.fetch.page_url = url.to_string();
    }
    if let Some(dir) = output_dir {
        config.output.output_dir = dir.to_path_buf();
    }

    // Final validation after overrides
    config.validate()?;

    Ok(config)
}

/// Create a spinner for indeterminate network operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) =
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print the human-readable pipeline summary
pub fn print_summary(date: &BulletinDate, stats: &PipelineStats) {
    let duration = HumanDuration(stats.processing_time);

    println!("\n{}", "Bulletin extraction complete".green().bold());
    println!("   Bulletin date:      {}", date);
    if let Some(url) = &stats.workbook_url {
        println!("   Workbook:           {} ({} bytes)", url, stats.workbook_bytes);
    }
    println!("   Rows scanned:       {}", stats.rows_scanned);
    println!("   Records extracted:  {}", stats.records_emitted);
    println!("   Aggregates dropped: {}", stats.aggregate_rows_filtered);
    if let Some(path) = &stats.report_path {
        println!(
            "   Report:             {} ({} bytes)",
            path.display(),
            stats.report_bytes
        );
    }
    println!("   Processing time:    {}", duration);

    if stats.used_fallback {
        println!(
            "{}",
            "   Note: columns were not recognised; keyed fallback extraction was used".yellow()
        );
    }
    if stats.records_emitted == 0 {
        println!(
            "{}",
            "   Warning: no price records were extracted from this workbook".yellow()
        );
    }

    println!();
}
