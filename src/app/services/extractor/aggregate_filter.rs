//! Aggregate-row filtering
//!
//! Bulletins append computed summary rows (EU average, weighted average,
//! euro area totals) after the country rows. These are recognised by their
//! country text and dropped. The filter is stable: surviving records keep
//! their document order. Earlier revisions instead sliced a fixed number of
//! trailing rows off; that positional variant misfires when the summary
//! block changes size and is deliberately not used.

use super::stats::ExtractionStats;
use crate::app::models::PriceRecord;
use crate::constants::{AGGREGATE_MARKERS_CI, AGGREGATE_MARKERS_EXACT};

/// True when a country name marks an aggregate/summary row
pub fn is_aggregate_row(country: &str) -> bool {
    let lower = country.to_lowercase();
    AGGREGATE_MARKERS_CI.iter().any(|m| lower.contains(m))
        || AGGREGATE_MARKERS_EXACT.iter().any(|m| country.contains(m))
}

/// Drop aggregate rows from a record sequence, preserving order
pub fn filter_aggregates(
    records: Vec<PriceRecord>,
    stats: &mut ExtractionStats,
) -> Vec<PriceRecord> {
    let before = records.len();
    let filtered: Vec<PriceRecord> = records
        .into_iter()
        .filter(|r| !is_aggregate_row(&r.country))
        .collect();

    stats.aggregate_rows_filtered += before - filtered.len();
    filtered
}
