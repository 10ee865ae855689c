//! The tabular document capability interface and its in-memory form
//!
//! The extractor consumes documents exclusively through [`TabularDocument`]:
//! positional cell access, the bounding range, and the header-keyed row
//! view. Loaders adapt their source format onto [`GridDocument`]; tests
//! build grids directly.

use super::cell::CellValue;
use super::keyed::KeyedRow;
use crate::constants::EMPTY_HEADER_KEY_PREFIX;

/// Inclusive bounding range of a document
///
/// An entirely empty document reports `(0, 0)` with an empty cell at that
/// position; the extractor degrades to an empty result in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRange {
    /// Highest row index reached by any cell
    pub max_row: usize,
    /// Highest column index reached by any cell
    pub max_col: usize,
}

/// Read-only capability interface over a parsed spreadsheet
pub trait TabularDocument {
    /// Cell at a zero-indexed (row, column) position
    ///
    /// Positions outside the bounding range read as empty.
    fn cell(&self, row: usize, col: usize) -> CellValue;

    /// Inclusive bounding range of the document
    fn bounding_range(&self) -> GridRange;

    /// Header labels derived from row 0, in column order
    ///
    /// Blank header cells get synthetic `__EMPTY_<col>` keys so that every
    /// column stays addressable and ordering is preserved.
    fn header_keys(&self) -> Vec<String> {
        let range = self.bounding_range();
        (0..=range.max_col)
            .map(|col| {
                let text = self.cell(0, col).as_text().trim().to_string();
                if text.is_empty() {
                    format!("{}{}", EMPTY_HEADER_KEY_PREFIX, col)
                } else {
                    text
                }
            })
            .collect()
    }

    /// Rows 1.. as ordered key→value mappings keyed by [`header_keys`]
    ///
    /// Rows with no content at all are skipped, matching the behavior of
    /// spreadsheet-to-record conversion in common loaders.
    ///
    /// [`header_keys`]: TabularDocument::header_keys
    fn keyed_rows(&self) -> Vec<KeyedRow> {
        let range = self.bounding_range();
        let keys = self.header_keys();
        let mut rows = Vec::new();

        for row in 1..=range.max_row {
            let cells: Vec<CellValue> = (0..=range.max_col)
                .map(|col| self.cell(row, col))
                .collect();
            if cells.iter().all(|c| c.is_empty()) {
                continue;
            }
            rows.push(KeyedRow::new(
                keys.iter().cloned().zip(cells).collect(),
            ));
        }

        rows
    }
}

/// In-memory grid document
///
/// Constructed once by a loader (or directly in tests), read-only
/// thereafter.
#[derive(Debug, Clone)]
pub struct GridDocument {
    rows: Vec<Vec<CellValue>>,
    range: GridRange,
}

impl GridDocument {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        let max_row = rows.len().saturating_sub(1);
        let max_col = rows
            .iter()
            .map(|r| r.len().saturating_sub(1))
            .max()
            .unwrap_or(0);
        Self {
            rows,
            range: GridRange { max_row, max_col },
        }
    }

    /// Build a grid from rows of text, a convenience for tests
    pub fn from_text_rows(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|s| {
                            if s.is_empty() {
                                CellValue::Empty
                            } else {
                                CellValue::text(*s)
                            }
                        })
                        .collect()
                })
                .collect(),
        )
    }
}

impl TabularDocument for GridDocument {
    fn cell(&self, row: usize, col: usize) -> CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    fn bounding_range(&self) -> GridRange {
        self.range
    }
}
