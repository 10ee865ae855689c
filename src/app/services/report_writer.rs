//! Date-keyed JSON report output
//!
//! Reports land in a `<output>/<year>/<month>.<MonthName>/` tree with one
//! file per bulletin date, and the JSON body keys the record array by the
//! same date string so consumers can merge files without consulting
//! filenames.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::info;

use crate::app::models::{BulletinDate, PriceRecord};
use crate::constants::{month_dir_name, report_filename};
use crate::{Error, Result};

/// A report that has been written to disk
#[derive(Debug, Clone)]
pub struct WrittenReport {
    pub path: PathBuf,
    pub bytes: u64,
    pub record_count: usize,
}

/// Build the report body: `{ "<date>": [records…] }`
pub fn report_json(date: &BulletinDate, records: &[PriceRecord]) -> serde_json::Value {
    json!({ date.date_string(): records })
}

/// Path of the report file for a bulletin date
pub fn report_path(output_dir: &Path, date: &BulletinDate) -> PathBuf {
    output_dir
        .join(date.year().to_string())
        .join(month_dir_name(date.month(), &date.month_name()))
        .join(report_filename(&date.date_string()))
}

/// Serialize and write a report, creating parent directories
pub fn write_report(
    output_dir: &Path,
    date: &BulletinDate,
    records: &[PriceRecord],
    pretty: bool,
) -> Result<WrittenReport> {
    let path = report_path(output_dir, date);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::io(format!("Failed to create {}", parent.display()), e))?;
    }

    let body = report_json(date, records);
    let serialized = if pretty {
        serde_json::to_string_pretty(&body)
    } else {
        serde_json::to_string(&body)
    }
    .map_err(|e| Error::serialization("Failed to serialize report", e))?;

    fs::write(&path, &serialized)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))?;

    info!(
        "Wrote {} records to {} ({} bytes)",
        records.len(),
        path.display(),
        serialized.len()
    );

    Ok(WrittenReport {
        path,
        bytes: serialized.len() as u64,
        record_count: records.len(),
    })
}
