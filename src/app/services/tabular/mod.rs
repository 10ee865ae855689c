//! Typed tabular document model for spreadsheet content
//!
//! Spreadsheet cells are loosely typed: the same cell can carry a serialized
//! numeric form and a human-readable formatted form. This module models that
//! as a closed tagged variant with an explicit display-string side channel,
//! and exposes the capability interface the extractor consumes:
//! - [`cell`] - the [`CellValue`] variant and its string/number projections
//! - [`document`] - the [`TabularDocument`] trait and in-memory [`GridDocument`]
//! - [`keyed`] - the ordered key→value row view derived from the header row
//!
//! Documents are constructed once by a loader and read-only thereafter.

pub mod cell;
pub mod document;
pub mod keyed;

// Re-export main types for easy access
pub use cell::CellValue;
pub use document::{GridDocument, GridRange, TabularDocument};
pub use keyed::KeyedRow;
