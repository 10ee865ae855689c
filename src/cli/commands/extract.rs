//! Extract command implementation
//!
//! Runs the extraction pipeline on a local workbook file, writing the
//! dated JSON report or printing it to stdout with `--print`.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::shared::{PipelineStats, load_configuration, print_summary, setup_logging};
use crate::app::services::country_registry::CountryRegistry;
use crate::app::services::extractor::PriceExtractor;
use crate::app::services::{report_writer, workbook};
use crate::cli::args::ExtractArgs;
use crate::{Error, Result};

/// Extract command runner
pub async fn run_extract(args: ExtractArgs) -> Result<PipelineStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Extracting prices from {}", args.workbook.display());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(
        args.config_file.as_deref(),
        None,
        args.output_dir.as_deref(),
    )?;

    let doc = workbook::load_first_sheet(&args.workbook)?;

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

    let extractor = PriceExtractor::new(Arc::new(CountryRegistry::new()));
    let result = extractor.extract(&doc);

    let mut stats = PipelineStats::default();
    stats.record_extraction(&result);

    if result.stats.is_empty_result() {
        warn!(
            "No price records extracted from {}",
            args.workbook.display()
        );
    }

    if args.print {
        let body = report_writer::report_json(&date, &result.records);
        let serialized = serde_json::to_string_pretty(&body)
            .map_err(|e| Error::serialization("Failed to serialize report", e))?;
        println!("{}", serialized);
    } else {
        let report = report_writer::write_report(
            &config.output.output_dir,
            &date,
            &result.records,
            config.output.pretty_json,
        )?;
        stats.record_report(&report);
    }

    stats.processing_time = start_time.elapsed();

    if args.show_progress() && !args.print {
        print_summary(&date, &stats);
    }

    Ok(stats)
}
