//! Cell values and their string/number projections
//!
//! All header matching operates on the lowercase string projection of a
//! cell; all price reading operates on the float projection. Keeping both
//! projections here means the extractor never has to reason about cell
//! variants directly.

use chrono::NaiveDate;

/// A single spreadsheet cell
///
/// Numbers and dates optionally carry the formatted display string the
/// spreadsheet stored alongside the raw value. Header and date detection
/// consult whichever form is populated.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No content
    Empty,

    /// Plain text content
    Text(String),

    /// Numeric content with optional formatted form
    Number {
        value: f64,
        display: Option<String>,
    },

    /// Date content with optional formatted form
    Date {
        date: NaiveDate,
        display: Option<String>,
    },
}

impl CellValue {
    /// Text cell constructor
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Number cell constructor without a display form
    pub fn number(value: f64) -> Self {
        Self::Number {
            value,
            display: None,
        }
    }

    /// Date cell constructor without a display form
    pub fn date(date: NaiveDate) -> Self {
        Self::Date {
            date,
            display: None,
        }
    }

    /// True for cells with no content at all
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// String projection of the cell
    ///
    /// Prefers the stored display form; numbers without one are rendered
    /// without a trailing `.0` so that a header cell holding the number 95
    /// reads as "95".
    pub fn as_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number { value, display } => match display {
                Some(d) => d.clone(),
                None => format_number(*value),
            },
            Self::Date { date, display } => match display {
                Some(d) => d.clone(),
                None => date.format("%Y-%m-%d").to_string(),
            },
        }
    }

    /// Lowercase string projection, used by all header predicates
    pub fn to_lowercase_string(&self) -> String {
        self.as_text().to_lowercase()
    }

    /// Float projection of the cell
    ///
    /// Numbers convert directly; text parses its leading numeric prefix
    /// (so "1.75 €/L" reads as 1.75 and "n/a" as absent); dates and empty
    /// cells never convert.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number { value, .. } => Some(*value),
            Self::Text(s) => parse_float_prefix(s),
            Self::Empty | Self::Date { .. } => None,
        }
    }

    /// Date projection of the cell
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date { date, .. } => Some(*date),
            _ => None,
        }
    }
}

/// Render a float without a trailing `.0` when it is integral
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Parse the leading float of a string, ignoring trailing garbage
///
/// Accepts an optional sign, digits with an optional fractional part, and
/// an optional exponent. Returns None when no digits lead the string.
pub(crate) fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // An exponent only counts when it carries digits of its own
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text_variants() {
        assert_eq!(CellValue::Empty.as_text(), "");
        assert_eq!(CellValue::text("Country").as_text(), "Country");
        assert_eq!(CellValue::number(95.0).as_text(), "95");
        assert_eq!(CellValue::number(1.75).as_text(), "1.75");

        let formatted = CellValue::Number {
            value: 1.753,
            display: Some("1,753 €".to_string()),
        };
        assert_eq!(formatted.as_text(), "1,753 €");

        let date = CellValue::date(NaiveDate::from_ymd_opt(2025, 11, 17).unwrap());
        assert_eq!(date.as_text(), "2025-11-17");
    }

    #[test]
    fn test_lowercase_projection() {
        assert_eq!(
            CellValue::text("Member State").to_lowercase_string(),
            "member state"
        );
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(CellValue::number(1.68).as_f64(), Some(1.68));
        assert_eq!(CellValue::text("1.75").as_f64(), Some(1.75));
        assert_eq!(CellValue::text(" 1.75 €/L").as_f64(), Some(1.75));
        assert_eq!(CellValue::text("n/a").as_f64(), None);
        assert_eq!(CellValue::Empty.as_f64(), None);
        assert_eq!(
            CellValue::date(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()).as_f64(),
            None
        );
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("1.75"), Some(1.75));
        assert_eq!(parse_float_prefix("-0.5abc"), Some(-0.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
    }
}
