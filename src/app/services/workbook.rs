//! Workbook loading and bulletin date extraction
//!
//! Adapts a downloaded `.xlsx` workbook onto the tabular document model:
//! the first worksheet becomes a [`GridDocument`] with absolute cell
//! positions, so the extractor's row/column indices match what a person
//! sees in the spreadsheet. Also reads the bulletin publication date the
//! sheet carries in its second row.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use chrono::{Duration, NaiveDate};
use regex::Regex;
use tracing::{debug, warn};

use crate::app::models::BulletinDate;
use crate::app::services::tabular::{CellValue, GridDocument, TabularDocument};
use crate::constants::DATE_CELL;
use crate::{Error, Result};

/// Load the first worksheet of an `.xlsx` workbook as a grid document
pub fn load_first_sheet(path: &Path) -> Result<GridDocument> {
    let file = path.display().to_string();

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| Error::workbook(&file, e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::workbook(&file, "workbook contains no sheets"))?
        .map_err(|e| Error::workbook(&file, e.to_string()))?;

    // The used range can start below/right of A1; keep absolute positions
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let (end_row, end_col) = range.end().unwrap_or((0, 0));

    let mut rows =
        vec![vec![CellValue::Empty; end_col as usize + 1]; end_row as usize + 1];
    for (r, row) in range.rows().enumerate() {
        for (c, data) in row.iter().enumerate() {
            rows[start_row as usize + r][start_col as usize + c] = convert_cell(data);
        }
    }

    debug!(
        "Loaded sheet from {}: {} rows x {} cols",
        file,
        end_row as usize + 1,
        end_col as usize + 1
    );

    Ok(GridDocument::new(rows))
}

/// Map a spreadsheet cell onto the tabular cell model
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::number(*f),
        Data::Int(i) => CellValue::number(*i as f64),
        Data::Bool(b) => CellValue::text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::date(ndt.date()),
            None => CellValue::number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => {
            let parsed = s
                .get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok());
            match parsed {
                Some(date) => CellValue::Date {
                    date,
                    display: Some(s.clone()),
                },
                None => CellValue::Text(s.clone()),
            }
        }
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}

/// Extract the bulletin publication date from a loaded sheet
///
/// Reads the date cell in the second row: date cells convert directly,
/// numeric cells are treated as spreadsheet serial dates, and text cells
/// are tried as `DD/MM/YYYY` then `YYYY-MM-DD`. Falls back to today when
/// nothing parses, matching the bulletin's weekly publication cadence.
pub fn extract_bulletin_date(doc: &dyn TabularDocument) -> BulletinDate {
    let (row, col) = DATE_CELL;
    let cell = doc.cell(row, col);

    let parsed = match &cell {
        CellValue::Number { value, display } => display
            .as_deref()
            .and_then(parse_display_date)
            .or_else(|| excel_serial_to_date(*value)),
        CellValue::Text(s) => parse_display_date(s)
            .or_else(|| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()),
        _ => cell.as_date(),
    };

    match parsed {
        Some(date) => BulletinDate::new(date),
        None => {
            warn!("No recognisable date in sheet cell ({}, {}), using today", row, col);
            BulletinDate::today()
        }
    }
}

/// Parse a `DD/MM/YYYY` date anywhere in a display string
fn parse_display_date(text: &str) -> Option<NaiveDate> {
    let re = Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").ok()?;
    let caps = re.captures(text)?;

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Convert a spreadsheet serial day number to a date
///
/// Serial day 1 is 1900-01-01 with the epoch anchored at 1899-12-30 to
/// absorb the historical leap-year quirk. Values outside a plausible
/// bulletin range are rejected rather than mapped to nonsense dates.
fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !(20_000.0..80_000.0).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some(epoch + Duration::days(serial as i64))
}
