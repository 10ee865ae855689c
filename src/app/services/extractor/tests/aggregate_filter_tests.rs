//! Tests for aggregate-row filtering

use crate::app::models::PriceRecord;
use crate::app::services::extractor::aggregate_filter::{filter_aggregates, is_aggregate_row};
use crate::app::services::extractor::stats::ExtractionStats;

fn record(country: &str) -> PriceRecord {
    PriceRecord {
        country: country.to_string(),
        country_code: None,
        petrol95: Some(1.0),
        diesel: Some(1.0),
    }
}

#[test]
fn test_case_insensitive_markers() {
    assert!(is_aggregate_row("Moyenne EU"));
    assert!(is_aggregate_row("moyenne pondérée"));
    assert!(is_aggregate_row("Weighted average"));
    assert!(is_aggregate_row("WEIGHTED AVERAGE"));
    assert!(is_aggregate_row("Gewichteter Durchschnitt"));
    assert!(is_aggregate_row("EU average"));
}

#[test]
fn test_exact_markers_are_case_sensitive() {
    assert!(is_aggregate_row("EUR27"));
    assert!(is_aggregate_row("EUR27 with taxes"));
    assert!(is_aggregate_row("CE/EC/EG"));
    assert!(is_aggregate_row("Euro Area"));

    // Exact markers do not match in other casings
    assert!(!is_aggregate_row("eur27"));
    assert!(!is_aggregate_row("euro area"));
}

#[test]
fn test_country_names_pass_through() {
    assert!(!is_aggregate_row("Germany"));
    assert!(!is_aggregate_row("Austria"));
    assert!(!is_aggregate_row("North Macedonia"));
}

#[test]
fn test_filter_is_stable_and_counts() {
    let records = vec![
        record("Germany"),
        record("Moyenne EU"),
        record("France"),
        record("EUR27"),
        record("Italy"),
    ];

    let mut stats = ExtractionStats::default();
    let filtered = filter_aggregates(records, &mut stats);

    let countries: Vec<&str> = filtered.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(countries, vec!["Germany", "France", "Italy"]);
    assert_eq!(stats.aggregate_rows_filtered, 2);
}

#[test]
fn test_no_positional_trimming_of_trailing_rows() {
    // Trailing country rows survive; only text-matched aggregates drop
    let records = vec![record("Sweden"), record("Norway")];

    let mut stats = ExtractionStats::default();
    let filtered = filter_aggregates(records, &mut stats);
    assert_eq!(filtered.len(), 2);
    assert_eq!(stats.aggregate_rows_filtered, 0);
}
