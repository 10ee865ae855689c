//! Ordered key→value row view
//!
//! The fallback extraction path and the first header-location pass both
//! interpret rows as header-keyed mappings. Column insertion order must be
//! preserved: "first value of the row" semantics depend on it, so this is an
//! explicit ordered mapping rather than a hash map.

use super::cell::CellValue;

/// One data row keyed by the header labels of its document
#[derive(Debug, Clone)]
pub struct KeyedRow {
    pairs: Vec<(String, CellValue)>,
}

impl KeyedRow {
    pub fn new(pairs: Vec<(String, CellValue)>) -> Self {
        Self { pairs }
    }

    /// Value for an exact key, first match in column order
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Header keys in column order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// The leftmost value of the row
    pub fn first_value(&self) -> Option<&CellValue> {
        self.pairs.first().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
