//! Extraction statistics and result structures

use crate::app::models::PriceRecord;

/// Result of one extraction run
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Emitted records, in document row order
    pub records: Vec<PriceRecord>,

    /// Counters describing the run
    pub stats: ExtractionStats,
}

/// Counters describing an extraction run
#[derive(Debug, Clone, Default)]
pub struct ExtractionStats {
    /// Data rows visited
    pub rows_scanned: usize,

    /// Rows skipped for an empty, oversized, or missing country cell, or
    /// for carrying no parseable price
    pub rows_skipped: usize,

    /// Records dropped by the aggregate-row filter
    pub aggregate_rows_filtered: usize,

    /// Records in the final output
    pub records_emitted: usize,

    /// True when no country column resolved and the keyed fallback path ran
    pub used_fallback: bool,
}

impl ExtractionStats {
    /// True when the run produced nothing, the one failure state callers
    /// may want to treat as an error
    pub fn is_empty_result(&self) -> bool {
        self.records_emitted == 0
    }
}
