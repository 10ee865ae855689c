//! Application constants for the oil bulletin processor
//!
//! This module contains the bulletin source locations, the header-matching
//! keywords used by the column locator, the aggregate-row markers, and the
//! structural limits of the extraction heuristics.

// =============================================================================
// Bulletin Source
// =============================================================================

/// Base URL of the bulletin publisher
pub const BULLETIN_BASE_URL: &str = "https://energy.ec.europa.eu";

/// Page listing the weekly bulletin downloads
pub const BULLETIN_PAGE_URL: &str =
    "https://energy.ec.europa.eu/data-and-analysis/weekly-oil-bulletin_en";

/// Anchor label identifying the with-taxes price workbook
pub const WORKBOOK_LINK_LABEL: &str = "prices with taxes";

/// Default user agent for bulletin page requests
pub const DEFAULT_USER_AGENT: &str = concat!("oil-bulletin/", env!("CARGO_PKG_VERSION"));

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Header Matching Keywords
// =============================================================================
//
// All keywords are matched as case-insensitive substrings of header text.
// Order matters only in that the first matching column wins.

/// Keywords identifying the country / member state column
pub const COUNTRY_KEYWORDS: &[&str] = &["country", "member state", "state"];

/// Keywords identifying the Euro-super 95 petrol column
pub const PETROL_KEYWORDS: &[&str] = &["95", "eurosuper", "unleaded"];

/// Keywords identifying the diesel column
pub const DIESEL_KEYWORDS: &[&str] = &["diesel", "gasoil"];

/// Literal header keys tried by the fallback row extractor, in order
pub const COUNTRY_KEY_FALLBACKS: &[&str] = &["Country", "Member State", "MemberState"];
pub const PETROL_KEY_FALLBACKS: &[&str] = &["Eurosuper 95", "Unleaded 95"];
pub const DIESEL_KEY_FALLBACKS: &[&str] = &["Diesel", "Gasoil"];

// =============================================================================
// Extraction Heuristics
// =============================================================================

/// Number of leading rows scanned when searching for a raw header row
pub const HEADER_SCAN_ROWS: usize = 5;

/// Number of leading rows scanned when locating the header row by column
pub const HEADER_ROW_SCAN_ROWS: usize = 10;

/// Country cells at or above this length are summary text, not country names
pub const MAX_COUNTRY_NAME_LEN: usize = 50;

/// Synthetic key prefix for blank header cells in the keyed-row view
pub const EMPTY_HEADER_KEY_PREFIX: &str = "__EMPTY_";

// =============================================================================
// Aggregate Row Markers
// =============================================================================

/// Aggregate-row markers matched case-insensitively against country names
pub const AGGREGATE_MARKERS_CI: &[&str] =
    &["moyenne", "weighted average", "gewichteter", "average"];

/// Aggregate-row markers matched as exact (case-sensitive) substrings
pub const AGGREGATE_MARKERS_EXACT: &[&str] = &["CE/EC/EG", "EUR27", "Euro Area"];

// =============================================================================
// Date Handling
// =============================================================================

/// Sheet position of the bulletin date cell (second row, first column)
pub const DATE_CELL: (usize, usize) = (1, 0);

/// Date format used in report filenames and JSON keys
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Output Layout
// =============================================================================

/// Default report output directory
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Get the report filename for a bulletin date string
pub fn report_filename(date_string: &str) -> String {
    format!("{}.json", date_string)
}

/// Get the month directory name, e.g. "11.November"
pub fn month_dir_name(month: u32, month_name: &str) -> String {
    format!("{}.{}", month, month_name)
}
