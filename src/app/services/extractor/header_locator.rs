//! Column location by fuzzy header matching
//!
//! Two passes, first match wins at each step, no scoring and no
//! backtracking. The keyed pass reads the header labels of the keyed-row
//! view; the raw-grid pass only runs when the keyed pass found no country
//! column, and scans the first few grid rows for a row whose concatenated
//! text looks like a header.

use crate::app::services::tabular::TabularDocument;
use crate::constants::{COUNTRY_KEYWORDS, DIESEL_KEYWORDS, HEADER_SCAN_ROWS, PETROL_KEYWORDS};

/// Resolved column index per logical field
///
/// Absence is a valid state, not an error: the row extractor degrades to
/// named-field heuristics when the country column stays unresolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnIndices {
    pub country: Option<usize>,
    pub petrol: Option<usize>,
    pub diesel: Option<usize>,
}

impl ColumnIndices {
    /// True when no field resolved at all
    pub fn is_unresolved(&self) -> bool {
        self.country.is_none() && self.petrol.is_none() && self.diesel.is_none()
    }
}

/// Locate the country, petrol, and diesel columns of a document
pub fn locate_columns(doc: &dyn TabularDocument) -> ColumnIndices {
    let keyed = keyed_header_pass(doc);
    if keyed.country.is_some() {
        return keyed;
    }

    // The raw scan re-resolves all three fields from the header row it
    // finds; keyed petrol/diesel hits without a country column are
    // discarded along with it.
    raw_grid_pass(doc).unwrap_or(keyed)
}

/// True when the lowercase text contains any of the keywords
fn matches_any(lower_text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| lower_text.contains(kw))
}

/// Pass 1: scan the header labels of the keyed-row view
///
/// Only applies when the document has at least one keyed data row, so that
/// row 0 genuinely acts as a header. Each field takes the first key in
/// column order satisfying its predicate.
fn keyed_header_pass(doc: &dyn TabularDocument) -> ColumnIndices {
    if doc.keyed_rows().is_empty() {
        return ColumnIndices::default();
    }

    let keys: Vec<String> = doc
        .header_keys()
        .into_iter()
        .map(|k| k.to_lowercase())
        .collect();

    ColumnIndices {
        country: keys.iter().position(|k| matches_any(k, COUNTRY_KEYWORDS)),
        petrol: keys.iter().position(|k| matches_any(k, PETROL_KEYWORDS)),
        diesel: keys.iter().position(|k| matches_any(k, DIESEL_KEYWORDS)),
    }
}

/// Pass 2: scan the raw grid for a header row
///
/// A row is a header row when its space-joined lowercase text contains
/// "country" and either "95" or "diesel". Scanning stops at the first such
/// row; fields resolve to the first matching column left to right.
fn raw_grid_pass(doc: &dyn TabularDocument) -> Option<ColumnIndices> {
    let range = doc.bounding_range();

    for row in 0..=HEADER_SCAN_ROWS.min(range.max_row) {
        let cells: Vec<String> = (0..=range.max_col)
            .map(|col| doc.cell(row, col).to_lowercase_string())
            .collect();

        let row_text = cells.join(" ");
        if !(row_text.contains("country") && (row_text.contains("95") || row_text.contains("diesel")))
        {
            continue;
        }

        let find = |keywords: &[&str]| {
            cells
                .iter()
                .position(|c| !c.is_empty() && matches_any(c, keywords))
        };

        return Some(ColumnIndices {
            country: find(COUNTRY_KEYWORDS),
            petrol: find(PETROL_KEYWORDS),
            diesel: find(DIESEL_KEYWORDS),
        });
    }

    None
}
