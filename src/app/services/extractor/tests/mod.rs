//! Unit tests for the price extractor phases

mod aggregate_filter_tests;
mod header_locator_tests;
mod row_extractor_tests;

use std::sync::Arc;

use crate::app::services::country_registry::CountryRegistry;
use crate::app::services::extractor::PriceExtractor;
use crate::app::services::tabular::{CellValue, GridDocument};

/// Extractor wired to the real country registry
pub fn test_extractor() -> PriceExtractor {
    PriceExtractor::new(Arc::new(CountryRegistry::new()))
}

/// Standard bulletin-shaped document used across the tests
pub fn standard_document() -> GridDocument {
    GridDocument::new(vec![
        vec![
            CellValue::text("Country"),
            CellValue::text("Unleaded 95 (€/L)"),
            CellValue::text("Diesel (€/L)"),
        ],
        vec![
            CellValue::text("Germany"),
            CellValue::number(1.75),
            CellValue::number(1.68),
        ],
        vec![
            CellValue::text("Moyenne EU"),
            CellValue::number(1.80),
            CellValue::number(1.70),
        ],
        vec![CellValue::text(""), CellValue::Empty, CellValue::Empty],
    ])
}
