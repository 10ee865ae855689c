//! Core data models for the oil bulletin processor
//!
//! A [`PriceRecord`] is the unit of output: one country with its Euro-super
//! 95 and diesel prices. A [`BulletinDate`] carries the publication date the
//! records are keyed by. Both are immutable once constructed; the whole
//! pipeline is a pure transform from a tabular document to a record
//! sequence.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::REPORT_DATE_FORMAT;

/// A single country's fuel prices from one bulletin
///
/// Invariants, enforced by the extractor:
/// - `country` is non-empty and trimmed
/// - at least one of `petrol95` / `diesel` is present
/// - `country` never matches an aggregate-row marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    /// Country name as printed in the bulletin
    pub country: String,

    /// ISO 3166-1 alpha-2 code, when the registry recognises the name
    pub country_code: Option<String>,

    /// Euro-super 95 price, absent when the cell was missing or unparseable
    pub petrol95: Option<f64>,

    /// Diesel price, absent when the cell was missing or unparseable
    pub diesel: Option<f64>,
}

impl PriceRecord {
    /// True when at least one price is present
    ///
    /// Records failing this test are never emitted by the extractor.
    pub fn has_any_price(&self) -> bool {
        self.petrol95.is_some() || self.diesel.is_some()
    }
}

/// Publication date of a bulletin
///
/// Wraps a [`NaiveDate`] and provides the `YYYY-MM-DD` string used for
/// report filenames and JSON keys, plus the Thursday alignment the bulletin
/// publication schedule follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletinDate(NaiveDate);

impl BulletinDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date, used when the sheet carries no recognisable date
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// English month name, e.g. "November"
    pub fn month_name(&self) -> String {
        self.0.format("%B").to_string()
    }

    /// Date string in `YYYY-MM-DD` form
    pub fn date_string(&self) -> String {
        self.0.format(REPORT_DATE_FORMAT).to_string()
    }

    /// The Thursday of the same week, weeks starting on Monday
    ///
    /// Bulletins are published on Thursdays; sheets sometimes carry the
    /// Monday survey date instead. Sundays map back to the previous week's
    /// Thursday.
    pub fn thursday_of_week(&self) -> Self {
        let day = self.0.weekday().num_days_from_sunday() as i64;
        let diff = if day == 0 { -3 } else { 4 - day };
        Self(self.0 + Duration::days(diff))
    }
}

impl std::fmt::Display for BulletinDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.date_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> BulletinDate {
        BulletinDate::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_has_any_price() {
        let record = PriceRecord {
            country: "Germany".to_string(),
            country_code: Some("DE".to_string()),
            petrol95: Some(1.75),
            diesel: None,
        };
        assert!(record.has_any_price());

        let empty = PriceRecord {
            country: "Germany".to_string(),
            country_code: Some("DE".to_string()),
            petrol95: None,
            diesel: None,
        };
        assert!(!empty.has_any_price());
    }

    #[test]
    fn test_record_serializes_camel_case_with_nulls() {
        let record = PriceRecord {
            country: "France".to_string(),
            country_code: Some("FR".to_string()),
            petrol95: None,
            diesel: Some(1.6),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["country"], "France");
        assert_eq!(json["countryCode"], "FR");
        assert!(json["petrol95"].is_null());
        assert_eq!(json["diesel"], 1.6);
    }

    #[test]
    fn test_thursday_alignment() {
        // 2025-11-17 is a Monday; its week's Thursday is 2025-11-20
        assert_eq!(date(2025, 11, 17).thursday_of_week(), date(2025, 11, 20));
        // Thursday maps to itself
        assert_eq!(date(2025, 11, 20).thursday_of_week(), date(2025, 11, 20));
        // Saturday still belongs to the same week
        assert_eq!(date(2025, 11, 22).thursday_of_week(), date(2025, 11, 20));
        // Sunday falls back to the previous week's Thursday
        assert_eq!(date(2025, 11, 23).thursday_of_week(), date(2025, 11, 20));
    }

    #[test]
    fn test_date_strings() {
        let d = date(2025, 3, 6);
        assert_eq!(d.date_string(), "2025-03-06");
        assert_eq!(d.month_name(), "March");
        assert_eq!(d.year(), 2025);
        assert_eq!(d.month(), 3);
        assert_eq!(d.day(), 6);
    }
}
