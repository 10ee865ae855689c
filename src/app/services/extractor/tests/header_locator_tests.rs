//! Tests for column location

use crate::app::services::extractor::header_locator::{ColumnIndices, locate_columns};
use crate::app::services::tabular::{CellValue, GridDocument};

#[test]
fn test_keyed_pass_resolves_member_state_header() {
    let doc = GridDocument::from_text_rows(&[
        &["Member State", "Eurosuper 95", "Gasoil"],
        &["Belgium", "1.71", "1.74"],
    ]);

    let columns = locate_columns(&doc);
    assert_eq!(columns.country, Some(0));
    assert_eq!(columns.petrol, Some(1));
    assert_eq!(columns.diesel, Some(2));
}

#[test]
fn test_keyed_pass_first_match_wins() {
    // Two petrol-ish headers; the leftmost one must win
    let doc = GridDocument::from_text_rows(&[
        &["Country", "Euro-super 95", "Unleaded 95 historic", "Diesel"],
        &["Austria", "1.55", "1.50", "1.62"],
    ]);

    let columns = locate_columns(&doc);
    assert_eq!(columns.petrol, Some(1));
}

#[test]
fn test_raw_pass_finds_header_below_title_rows() {
    let doc = GridDocument::from_text_rows(&[
        &["Weekly Oil Bulletin"],
        &["17/11/2025"],
        &["Country", "Euro-super 95", "Diesel"],
        &["Germany", "1.75", "1.68"],
    ]);

    let columns = locate_columns(&doc);
    assert_eq!(columns.country, Some(0));
    assert_eq!(columns.petrol, Some(1));
    assert_eq!(columns.diesel, Some(2));
}

#[test]
fn test_raw_pass_needs_country_plus_fuel_keyword() {
    // A row mentioning prices but no country is not a header row
    let doc = GridDocument::from_text_rows(&[
        &["Consumer prices, 95 octane"],
        &["Country", "Euro-super 95", "Diesel"],
        &["Spain", "1.49", "1.45"],
    ]);

    // Row 0 lacks "country", so row 1 is the header
    let columns = locate_columns(&doc);
    assert_eq!(columns.country, Some(0));
    assert_eq!(columns.petrol, Some(1));
    assert_eq!(columns.diesel, Some(2));
}

#[test]
fn test_raw_pass_applies_to_header_only_document() {
    // A single header row has no keyed data rows, so only the raw pass runs
    let doc = GridDocument::from_text_rows(&[&["Country", "Euro-super 95", "Diesel"]]);

    let columns = locate_columns(&doc);
    assert_eq!(columns.country, Some(0));
    assert_eq!(columns.petrol, Some(1));
    assert_eq!(columns.diesel, Some(2));
}

#[test]
fn test_header_beyond_scan_window_is_missed() {
    let mut rows: Vec<Vec<CellValue>> = (0..7)
        .map(|i| vec![CellValue::text(format!("filler {}", i))])
        .collect();
    rows.push(vec![
        CellValue::text("Country"),
        CellValue::text("Euro-super 95"),
        CellValue::text("Diesel"),
    ]);
    let doc = GridDocument::new(rows);

    // Row 7 lies outside the 0..=5 raw scan window
    let columns = locate_columns(&doc);
    assert_eq!(columns.country, None);
}

#[test]
fn test_nothing_resolves_without_error() {
    let doc = GridDocument::from_text_rows(&[
        &["Alpha", "Beta", "Gamma"],
        &["one", "two", "three"],
    ]);

    let columns = locate_columns(&doc);
    assert!(columns.is_unresolved());
}

#[test]
fn test_empty_document_is_unresolved() {
    let doc = GridDocument::new(vec![]);
    assert_eq!(locate_columns(&doc), ColumnIndices::default());
}
