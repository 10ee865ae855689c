//! Data row extraction into candidate price records
//!
//! Two paths. The indexed path walks the grid positionally once the country
//! column is known; the fallback path runs only when no country column
//! resolved and reads the keyed-row view through literal header names.
//! Neither path ever fails: malformed cells degrade to absent fields and
//! unusable rows are skipped.

use tracing::debug;

use super::header_locator::ColumnIndices;
use super::stats::ExtractionStats;
use crate::app::models::PriceRecord;
use crate::app::services::country_registry::CountryRegistry;
use crate::app::services::tabular::{CellValue, KeyedRow, TabularDocument};
use crate::constants::{
    COUNTRY_KEY_FALLBACKS, DIESEL_KEY_FALLBACKS, HEADER_ROW_SCAN_ROWS, MAX_COUNTRY_NAME_LEN,
    PETROL_KEY_FALLBACKS,
};

/// Walk the document's data rows into candidate records
///
/// Records are emitted in row order and have not yet passed the aggregate
/// filter. A record is emitted only when at least one price parsed.
pub fn extract_rows(
    doc: &dyn TabularDocument,
    columns: &ColumnIndices,
    registry: &CountryRegistry,
    stats: &mut ExtractionStats,
) -> Vec<PriceRecord> {
    match columns.country {
        Some(country_col) => extract_indexed(doc, country_col, columns, registry, stats),
        None => {
            stats.used_fallback = true;
            extract_keyed_fallback(doc, columns, registry, stats)
        }
    }
}

/// Indexed path: positional reads at the resolved columns
fn extract_indexed(
    doc: &dyn TabularDocument,
    country_col: usize,
    columns: &ColumnIndices,
    registry: &CountryRegistry,
    stats: &mut ExtractionStats,
) -> Vec<PriceRecord> {
    let range = doc.bounding_range();
    let header_row = find_header_row(doc, country_col);
    let mut records = Vec::new();

    for row in (header_row + 1)..=range.max_row {
        stats.rows_scanned += 1;

        let country_cell = doc.cell(row, country_col);
        if country_cell.is_empty() {
            stats.rows_skipped += 1;
            continue;
        }

        let country = country_cell.as_text().trim().to_string();
        // Long text in the country column is summary prose, not a country
        if country.is_empty() || country.chars().count() >= MAX_COUNTRY_NAME_LEN {
            stats.rows_skipped += 1;
            continue;
        }

        let petrol95 = columns.petrol.and_then(|col| doc.cell(row, col).as_f64());
        let diesel = columns.diesel.and_then(|col| doc.cell(row, col).as_f64());

        if petrol95.is_none() && diesel.is_none() {
            debug!("Row {} ('{}') has no parseable price, skipped", row, country);
            stats.rows_skipped += 1;
            continue;
        }

        let country_code = registry.resolve_code(&country).map(String::from);
        records.push(PriceRecord {
            country,
            country_code,
            petrol95,
            diesel,
        });
    }

    records
}

/// Locate the header row by probing the country column
///
/// Scans the first rows for a country cell literally containing "country";
/// defaults to row 0 when none does (e.g. a "Member State" label).
fn find_header_row(doc: &dyn TabularDocument, country_col: usize) -> usize {
    let range = doc.bounding_range();
    (0..=HEADER_ROW_SCAN_ROWS.min(range.max_row))
        .find(|&row| {
            doc.cell(row, country_col)
                .to_lowercase_string()
                .contains("country")
        })
        .unwrap_or(0)
}

/// Fallback path: keyed reads through header names
///
/// Price columns the header pass resolved are honoured even here: their
/// header keys are tried first, then the literal fallback names.
fn extract_keyed_fallback(
    doc: &dyn TabularDocument,
    columns: &ColumnIndices,
    registry: &CountryRegistry,
    stats: &mut ExtractionStats,
) -> Vec<PriceRecord> {
    let keys = doc.header_keys();
    let petrol_key = columns.petrol.and_then(|col| keys.get(col));
    let diesel_key = columns.diesel.and_then(|col| keys.get(col));
    let mut records = Vec::new();

    for row in doc.keyed_rows() {
        stats.rows_scanned += 1;

        let Some(country) = fallback_country(&row) else {
            stats.rows_skipped += 1;
            continue;
        };

        let petrol95 = price_value(&row, petrol_key, PETROL_KEY_FALLBACKS);
        let diesel = price_value(&row, diesel_key, DIESEL_KEY_FALLBACKS);

        if petrol95.is_none() && diesel.is_none() {
            stats.rows_skipped += 1;
            continue;
        }

        let country_code = registry.resolve_code(&country).map(String::from);
        records.push(PriceRecord {
            country,
            country_code,
            petrol95,
            diesel,
        });
    }

    records
}

/// Country name for a keyed row: named keys in preference order, else the
/// first value of the row; must be non-empty text
fn fallback_country(row: &KeyedRow) -> Option<String> {
    let candidate = first_present(row, COUNTRY_KEY_FALLBACKS).or_else(|| row.first_value());

    match candidate {
        Some(CellValue::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}

/// Price for a keyed row: the resolved column's header key first, then the
/// literal fallback names
fn price_value(row: &KeyedRow, resolved_key: Option<&String>, fallbacks: &[&str]) -> Option<f64> {
    resolved_key
        .and_then(|key| row.get(key))
        .and_then(CellValue::as_f64)
        .or_else(|| first_present(row, fallbacks).and_then(CellValue::as_f64))
}

/// First key in order whose value carries content
fn first_present<'a>(row: &'a KeyedRow, keys: &[&str]) -> Option<&'a CellValue> {
    keys.iter()
        .filter_map(|key| row.get(key))
        .find(|value| match value {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty(),
            _ => true,
        })
}
