//! Oil Bulletin Processor Library
//!
//! A Rust library for turning the EU Weekly Oil Bulletin spreadsheet into
//! dated JSON reports of petrol and diesel consumer prices per country.
//!
//! This library provides tools for:
//! - Modelling spreadsheet content as a typed, read-only tabular document
//! - Locating country/petrol/diesel columns by fuzzy header matching
//! - Extracting per-country price records while dropping EU aggregate rows
//! - Resolving ISO 3166 country codes and currencies from a static registry
//! - Discovering and downloading the latest bulletin workbook
//! - Writing date-keyed JSON reports in a year/month directory layout

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bulletin_fetcher;
        pub mod country_registry;
        pub mod extractor;
        pub mod report_writer;
        pub mod tabular;
        pub mod workbook;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BulletinDate, PriceRecord};
pub use app::services::extractor::PriceExtractor;
pub use app::services::tabular::{CellValue, GridDocument, TabularDocument};
pub use config::Config;

/// Result type alias for the oil bulletin processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the bulletin processing pipeline
///
/// The price extractor itself is best-effort and never fails; these
/// variants cover the I/O pipeline that surrounds it (fetching, workbook
/// loading, report writing, configuration).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("Fetch error for '{url}': {message}")]
    Fetch {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// No workbook link could be located on the bulletin page
    #[error("Link discovery error: {message}")]
    LinkDiscovery { message: String },

    /// Spreadsheet could not be opened or read
    #[error("Workbook error in file '{file}': {message}")]
    Workbook { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a fetch error with context
    pub fn fetch(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a link discovery error
    pub fn link_discovery(message: impl Into<String>) -> Self {
        Self::LinkDiscovery {
            message: message.into(),
        }
    }

    /// Create a workbook error
    pub fn workbook(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Workbook {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self::Fetch {
            url,
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<calamine::XlsxError> for Error {
    fn from(error: calamine::XlsxError) -> Self {
        Self::Workbook {
            file: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
