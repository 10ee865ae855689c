//! Tests for row extraction and the extractor facade

use super::{standard_document, test_extractor};
use crate::app::services::tabular::{CellValue, GridDocument};

#[test]
fn test_standard_document_yields_single_record() {
    let result = test_extractor().extract(&standard_document());

    assert_eq!(result.records.len(), 1);
    let record = &result.records[0];
    assert_eq!(record.country, "Germany");
    assert_eq!(record.country_code.as_deref(), Some("DE"));
    assert_eq!(record.petrol95, Some(1.75));
    assert_eq!(record.diesel, Some(1.68));
    assert_eq!(result.stats.aggregate_rows_filtered, 1);
    assert!(!result.stats.used_fallback);
}

#[test]
fn test_unparseable_petrol_degrades_to_absent() {
    let doc = GridDocument::new(vec![
        vec![
            CellValue::text("Country"),
            CellValue::text("Unleaded 95"),
            CellValue::text("Diesel"),
        ],
        vec![
            CellValue::text("France"),
            CellValue::text("n/a"),
            CellValue::number(1.60),
        ],
    ]);

    let result = test_extractor().extract(&doc);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].country, "France");
    assert_eq!(result.records[0].petrol95, None);
    assert_eq!(result.records[0].diesel, Some(1.60));
}

#[test]
fn test_row_without_any_price_is_dropped() {
    let doc = GridDocument::from_text_rows(&[
        &["Country", "Unleaded 95", "Diesel"],
        &["Italy", "n/a", ""],
        &["Spain", "1.49", "1.45"],
    ]);

    let result = test_extractor().extract(&doc);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].country, "Spain");
    assert!(result.records.iter().all(|r| r.has_any_price()));
}

#[test]
fn test_long_country_text_is_summary_prose() {
    let long_note = "Prices as notified to the Commission by the member states, VAT included";
    let doc = GridDocument::from_text_rows(&[
        &["Country", "Unleaded 95", "Diesel"],
        &["Portugal", "1.69", "1.55"],
        &[long_note, "1.00", "1.00"],
    ]);

    let result = test_extractor().extract(&doc);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].country, "Portugal");
}

#[test]
fn test_whitespace_country_is_skipped() {
    let doc = GridDocument::from_text_rows(&[
        &["Country", "Unleaded 95", "Diesel"],
        &["   ", "1.69", "1.55"],
        &["Malta", "1.70", "1.59"],
    ]);

    let result = test_extractor().extract(&doc);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].country, "Malta");
}

#[test]
fn test_header_row_below_title_rows() {
    let doc = GridDocument::from_text_rows(&[
        &["Weekly Oil Bulletin"],
        &["17/11/2025"],
        &["Country", "Euro-super 95", "Diesel"],
        &["Germany", "1.75", "1.68"],
        &["Weighted average", "1.80", "1.70"],
    ]);

    let result = test_extractor().extract(&doc);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].country, "Germany");
}

#[test]
fn test_member_state_header_defaults_to_row_zero() {
    // No cell in the country column says "country"; data still starts at
    // row 1 because the header-row probe falls back to row 0
    let doc = GridDocument::from_text_rows(&[
        &["Member State", "Eurosuper 95", "Gasoil"],
        &["Belgium", "1.71", "1.74"],
    ]);

    let result = test_extractor().extract(&doc);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].country, "Belgium");
    assert_eq!(result.records[0].country_code.as_deref(), Some("BE"));
}

#[test]
fn test_unrecognised_layout_yields_empty_sequence() {
    let doc = GridDocument::from_text_rows(&[
        &["Alpha", "Beta", "Gamma"],
        &["one", "two", "three"],
    ]);

    let result = test_extractor().extract(&doc);
    assert!(result.records.is_empty());
    assert!(result.stats.is_empty_result());
    assert!(result.stats.used_fallback);
}

#[test]
fn test_fallback_path_reads_named_keys() {
    // Header says "Name" instead of "Country": no country column resolves,
    // but the literal "Eurosuper 95"/"Diesel" keys still carry data
    let doc = GridDocument::new(vec![
        vec![
            CellValue::text("Name"),
            CellValue::text("Eurosuper 95"),
            CellValue::text("Diesel"),
        ],
        vec![
            CellValue::text("Belgium"),
            CellValue::number(1.71),
            CellValue::number(1.74),
        ],
        vec![
            CellValue::number(42.0),
            CellValue::number(1.0),
            CellValue::number(1.0),
        ],
    ]);

    let result = test_extractor().extract(&doc);
    assert!(result.stats.used_fallback);
    // The numeric first value is not a country name and its row is skipped
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].country, "Belgium");
    assert_eq!(result.records[0].petrol95, Some(1.71));
    assert_eq!(result.records[0].diesel, Some(1.74));
}

#[test]
fn test_fallback_honours_resolved_price_columns() {
    // Unit suffixes keep the headers off the literal fallback names, but
    // the header pass still resolves both price columns; only the country
    // column is missing, so the fallback path must read through them
    let doc = GridDocument::new(vec![
        vec![
            CellValue::text("Name"),
            CellValue::text("Unleaded 95 (€/L)"),
            CellValue::text("Gasoil prices"),
        ],
        vec![
            CellValue::text("Belgium"),
            CellValue::number(1.71),
            CellValue::number(1.74),
        ],
    ]);

    let result = test_extractor().extract(&doc);
    assert!(result.stats.used_fallback);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].country, "Belgium");
    assert_eq!(result.records[0].petrol95, Some(1.71));
    assert_eq!(result.records[0].diesel, Some(1.74));
}

#[test]
fn test_fallback_named_keys_cover_unresolved_columns() {
    // The resolved petrol column is empty for this row; the literal
    // "Eurosuper 95" key still supplies the price
    let doc = GridDocument::new(vec![
        vec![
            CellValue::text("Name"),
            CellValue::text("Premium (95 RON)"),
            CellValue::text("Eurosuper 95"),
        ],
        vec![
            CellValue::text("Austria"),
            CellValue::Empty,
            CellValue::number(1.55),
        ],
    ]);

    let result = test_extractor().extract(&doc);
    assert!(result.stats.used_fallback);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].petrol95, Some(1.55));
}

#[test]
fn test_fallback_uses_first_value_when_no_named_key() {
    let doc = GridDocument::new(vec![
        vec![CellValue::text("Label"), CellValue::text("Diesel")],
        vec![CellValue::text("Norway"), CellValue::number(1.92)],
    ]);

    let result = test_extractor().extract(&doc);
    assert!(result.stats.used_fallback);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].country, "Norway");
    assert_eq!(result.records[0].country_code.as_deref(), Some("NO"));
    assert_eq!(result.records[0].petrol95, None);
    assert_eq!(result.records[0].diesel, Some(1.92));
}

#[test]
fn test_extraction_is_idempotent() {
    let doc = standard_document();
    let extractor = test_extractor();

    let first = extractor.extract(&doc);
    let second = extractor.extract(&doc);
    assert_eq!(first.records, second.records);
}

#[test]
fn test_unknown_country_gets_no_code() {
    let doc = GridDocument::from_text_rows(&[
        &["Country", "Unleaded 95", "Diesel"],
        &["Ruritania", "1.20", "1.10"],
    ]);

    let result = test_extractor().extract(&doc);
    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].country_code, None);
}
