//! Tabular price extractor for bulletin worksheets
//!
//! Bulletin workbooks vary in layout: header rows shift, labels change
//! language, and aggregate summary rows appear among the country rows. The
//! extractor locates the country / Euro-super 95 / diesel columns by fuzzy
//! header matching and walks the data rows into price records, in three
//! phases:
//! - [`header_locator`] - resolve column indices from header text
//! - [`row_extractor`] - walk data rows into candidate records
//! - [`aggregate_filter`] - drop EU average / weighted average rows
//!
//! The whole transform is best-effort and never fails: unresolved columns,
//! unparseable numbers, and summary rows degrade to absent fields or
//! skipped rows, and a document with no recognisable layout yields an empty
//! record sequence.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use oil_bulletin::app::services::country_registry::CountryRegistry;
//! use oil_bulletin::app::services::extractor::PriceExtractor;
//! use oil_bulletin::app::services::tabular::GridDocument;
//!
//! let extractor = PriceExtractor::new(Arc::new(CountryRegistry::new()));
//! let doc = GridDocument::from_text_rows(&[
//!     &["Country", "Eurosuper 95", "Diesel"],
//!     &["Germany", "1.75", "1.68"],
//! ]);
//! let result = extractor.extract(&doc);
//! assert_eq!(result.records.len(), 1);
//! ```

pub mod aggregate_filter;
pub mod header_locator;
pub mod row_extractor;
pub mod stats;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use header_locator::ColumnIndices;
pub use stats::{ExtractionResult, ExtractionStats};

use std::sync::Arc;
use tracing::{debug, info};

use crate::app::services::country_registry::CountryRegistry;
use crate::app::services::tabular::TabularDocument;

/// Price extractor over tabular bulletin documents
///
/// Holds the country registry collaborator used to resolve ISO codes for
/// emitted records. Extraction is a pure read of the document: running it
/// twice on the same document yields identical output.
pub struct PriceExtractor {
    registry: Arc<CountryRegistry>,
}

impl PriceExtractor {
    pub fn new(registry: Arc<CountryRegistry>) -> Self {
        Self { registry }
    }

    /// Extract all per-country price records from a document
    pub fn extract(&self, doc: &dyn TabularDocument) -> ExtractionResult {
        let columns = header_locator::locate_columns(doc);
        debug!(
            "Resolved columns: country={:?} petrol={:?} diesel={:?}",
            columns.country, columns.petrol, columns.diesel
        );

        let mut stats = ExtractionStats::default();
        let records = row_extractor::extract_rows(doc, &columns, &self.registry, &mut stats);
        let records = aggregate_filter::filter_aggregates(records, &mut stats);
        stats.records_emitted = records.len();

        info!(
            "Extraction complete: {} records from {} rows ({} skipped, {} aggregates filtered)",
            stats.records_emitted,
            stats.rows_scanned,
            stats.rows_skipped,
            stats.aggregate_rows_filtered
        );

        ExtractionResult { records, stats }
    }
}
