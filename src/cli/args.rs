//! Command-line argument definitions for the oil bulletin processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Each subcommand validates its own arguments before the command
//! implementations run.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::app::models::BulletinDate;
use crate::constants::REPORT_DATE_FORMAT;
use crate::{Error, Result};

/// CLI arguments for the oil bulletin processor
///
/// Extracts per-country Euro-super 95 and diesel prices from the EU Weekly
/// Oil Bulletin spreadsheet into dated JSON reports.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "oil-bulletin",
    version,
    about = "Extract EU Weekly Oil Bulletin fuel prices into dated JSON reports",
    long_about = "Downloads the latest EU Weekly Oil Bulletin workbook (or reads a local copy), \
                  locates the country, Euro-super 95, and diesel columns by fuzzy header \
                  matching, filters out EU aggregate rows, and writes one JSON report per \
                  bulletin date in a year/month directory tree."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Download the latest bulletin workbook and write a price report
    Fetch(FetchArgs),
    /// Extract prices from a local workbook file
    Extract(ExtractArgs),
    /// Show the country code and currency registry
    Countries(CountriesArgs),
}

/// Arguments for the fetch command (full download-and-extract pipeline)
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Output directory for the report tree
    ///
    /// Reports are written as <output>/<year>/<month>.<Month>/<date>.json.
    /// Defaults to ./data or the configured directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for the report tree"
    )]
    pub output_dir: Option<PathBuf>,

    /// Bulletin page URL override
    #[arg(long = "url", value_name = "URL", help = "Bulletin page URL override")]
    pub page_url: Option<String>,

    /// Direct workbook URL, skipping page link discovery
    #[arg(
        long = "workbook-url",
        value_name = "URL",
        help = "Download this workbook URL directly instead of scanning the bulletin page"
    )]
    pub workbook_url: Option<String>,

    /// Report date override (YYYY-MM-DD)
    ///
    /// Skips date extraction from the sheet. The override is still aligned
    /// to Thursday unless --no-week-align is given.
    #[arg(
        long = "date",
        value_name = "DATE",
        help = "Report date override (YYYY-MM-DD)"
    )]
    pub date: Option<String>,

    /// Keep the bulletin date as-is instead of aligning it to the Thursday
    /// of its week
    #[arg(long = "no-week-align", help = "Do not align the report date to Thursday")]
    pub no_week_align: bool,

    /// Keep the downloaded workbook at this path
    ///
    /// By default the workbook lands in a temporary file that is removed
    /// after extraction.
    #[arg(
        long = "keep-workbook",
        value_name = "FILE",
        help = "Keep the downloaded workbook at this path"
    )]
    pub keep_workbook: Option<PathBuf>,

    /// Path to configuration file (TOML format)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the extract command (local workbook)
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Path to a local bulletin workbook (.xlsx)
    #[arg(value_name = "WORKBOOK", help = "Path to a local bulletin workbook")]
    pub workbook: PathBuf,

    /// Output directory for the report tree
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for the report tree"
    )]
    pub output_dir: Option<PathBuf>,

    /// Print the report JSON to stdout instead of writing a file
    #[arg(long = "print", help = "Print the report JSON to stdout")]
    pub print: bool,

    /// Report date override (YYYY-MM-DD)
    #[arg(
        long = "date",
        value_name = "DATE",
        help = "Report date override (YYYY-MM-DD)"
    )]
    pub date: Option<String>,

    /// Keep the bulletin date as-is instead of aligning it to the Thursday
    /// of its week
    #[arg(long = "no-week-align", help = "Do not align the report date to Thursday")]
    pub no_week_align: bool,

    /// Path to configuration file (TOML format)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the countries command (registry listing)
#[derive(Debug, Clone, Parser)]
pub struct CountriesArgs {
    /// Output format for the registry listing
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the registry listing"
    )]
    pub format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

/// Parse a YYYY-MM-DD date argument
fn parse_date_arg(value: &str) -> Result<BulletinDate> {
    NaiveDate::parse_from_str(value.trim(), REPORT_DATE_FORMAT)
        .map(BulletinDate::new)
        .map_err(|_| Error::configuration(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}

/// Map a verbosity count and quiet flag to a log level name
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl FetchArgs {
    /// Validate the fetch command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.page_url {
            if !url.starts_with("http") {
                return Err(Error::configuration(format!(
                    "Bulletin page URL must be http(s): {}",
                    url
                )));
            }
        }

        if let Some(url) = &self.workbook_url {
            if !url.starts_with("http") {
                return Err(Error::configuration(format!(
                    "Workbook URL must be http(s): {}",
                    url
                )));
            }
        }

        if let Some(date) = &self.date {
            parse_date_arg(date)?;
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Parsed date override, if one was given
    pub fn date_override(&self) -> Result<Option<BulletinDate>> {
        self.date.as_deref().map(parse_date_arg).transpose()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.workbook.exists() {
            return Err(Error::configuration(format!(
                "Workbook does not exist: {}",
                self.workbook.display()
            )));
        }

        if let Some(date) = &self.date {
            parse_date_arg(date)?;
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Parsed date override, if one was given
    pub fn date_override(&self) -> Result<Option<BulletinDate>> {
        self.date.as_deref().map(parse_date_arg).transpose()
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_date_arg() {
        let date = parse_date_arg("2025-11-20").unwrap();
        assert_eq!(date.date_string(), "2025-11-20");

        assert!(parse_date_arg("20/11/2025").is_err());
        assert!(parse_date_arg("not a date").is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(5, false), "trace");
        assert_eq!(log_level(3, true), "error");
    }

    #[test]
    fn test_fetch_args_validation() {
        let args = FetchArgs {
            output_dir: None,
            page_url: None,
            workbook_url: None,
            date: None,
            no_week_align: false,
            keep_workbook: None,
            config_file: None,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        let mut bad_url = args.clone();
        bad_url.page_url = Some("ftp://example.com".to_string());
        assert!(bad_url.validate().is_err());

        let mut bad_date = args.clone();
        bad_date.date = Some("yesterday".to_string());
        assert!(bad_date.validate().is_err());

        let mut missing_config = args.clone();
        missing_config.config_file = Some(PathBuf::from("/nonexistent/config.toml"));
        assert!(missing_config.validate().is_err());
    }

    #[test]
    fn test_extract_args_validation() {
        let dir = TempDir::new().unwrap();
        let workbook = dir.path().join("bulletin.xlsx");
        std::fs::write(&workbook, b"stub").unwrap();

        let args = ExtractArgs {
            workbook: workbook.clone(),
            output_dir: None,
            print: false,
            date: None,
            no_week_align: false,
            config_file: None,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        let mut missing = args.clone();
        missing.workbook = PathBuf::from("/nonexistent/bulletin.xlsx");
        assert!(missing.validate().is_err());
    }
}
